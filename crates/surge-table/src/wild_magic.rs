//! The built-in d100 wild-magic surge table.
//!
//! Twenty-five entries of four values each cover `01–100`. Several entries
//! draw from effect pools or roll dice of their own.

use surge_dice::DiceExpr;

use crate::error::TableResult;
use crate::pool::EffectPool;
use crate::range::Range;
use crate::resolver::Resolver;
use crate::table::{RangeTable, TableEntry};

/// Domain of the surge table: a single d100.
pub const DOMAIN: Range = Range::new(1, 100);

/// Friendly creatures that may appear (05–08).
pub const FRIENDLY_CREATURES: &[&str] = &[
    "[Монодрон](https://next.dnd.su/bestiary/21457-modron-monodrone/)",
    "[Дуодрон](https://next.dnd.su/bestiary/21456-modron-duodrone/)",
    "[Фламф](https://next.dnd.su/bestiary/21309-flumph/)",
    "[Единорог](https://next.dnd.su/bestiary/21601-unicorn/)",
];

/// Cosmetic effects on the caster (17–20, and all at once on 97–100).
pub const PERSONAL_EFFECTS: &[&str] = &[
    "вас окружает тихая неземная музыка, её слышите только вы и существа в пределах 5 футов от вас",
    "ваш размер увеличивается на одну категорию",
    "у вас отрастает длинная борода из перьев, остающаяся на лице, пока вы не чихнёте — в этот момент перья разлетаются с вашего лица и исчезают",
    "вы должны кричать, когда говорите",
    "иллюзорные бабочки порхают в воздухе в пределах 10 футов от вас",
    "у вас на лбу появляется глаз, дающий вам Преимущество в проверках Мудрости (Восприятие)",
    "розовые пузырьки вылетают у вас изо рта, когда вы говорите",
    "ваша кожа приобретает ярко-голубой оттенок на 24 часа или пока эффект не будет снят заклинанием Снятие проклятия",
];

/// Spells cast at random (57–60).
pub const RANDOM_SPELLS: &[&str] = &[
    "[Смятение](https://next.dnd.su/spells/10203-confusion/)",
    "[Огненный шар](https://next.dnd.su/spells/10514-fireball/)",
    "[Туманное облако](https://next.dnd.su/spells/10283-fog-cloud/)",
    "[Полёт](https://next.dnd.su/spells/10518-fly/)",
    "[Намасливание](https://next.dnd.su/spells/10532-grease/)",
    "[Левитация](https://next.dnd.su/spells/10560-levitate/)",
    "[Волшебная стрела](https://next.dnd.su/spells/10567-magic-missile/)",
    "[Отражения](https://next.dnd.su/spells/10584-mirror-image/)",
    "[Превращение](https://next.dnd.su/spells/10604-polymorph/)",
    "[Видение невидимого](https://next.dnd.su/spells/10632-see-invisibility/)",
];

const D4: DiceExpr = DiceExpr { count: 1, sides: 4 };
const D10: DiceExpr = DiceExpr { count: 1, sides: 10 };
const TWO_D10: DiceExpr = DiceExpr { count: 2, sides: 10 };
const FOUR_D10: DiceExpr = DiceExpr { count: 4, sides: 10 };

fn friendly_creatures() -> EffectPool {
    EffectPool::from_static("friendly creatures", FRIENDLY_CREATURES)
}

fn personal_effects() -> EffectPool {
    EffectPool::from_static("personal effects", PERSONAL_EFFECTS)
}

fn random_spells() -> EffectPool {
    EffectPool::from_static("random spells", RANDOM_SPELLS)
}

/// Restorations granted on 97–100; the last option applies every personal effect.
fn restorations() -> Resolver {
    Resolver::one_of(vec![
        Resolver::dice("вы восстанавливаете {} Хитов.", TWO_D10),
        Resolver::dice("один союзник восстанавливает {} Хитов.", TWO_D10),
        Resolver::text("вы восстанавливаете ячейку заклинаний."),
        Resolver::text("союзник восстанавливает ячейку заклинаний."),
        Resolver::text("вы восстанавливаете все Очки чародейства"),
        Resolver::joined(personal_effects(), "; "),
    ])
}

/// Build the surge table.
///
/// The data is static, so an error here means the table was edited into an
/// inconsistent state; callers should refuse to start.
pub fn wild_magic_table() -> TableResult<RangeTable> {
    RangeTable::new(
        "Дикая магия",
        DOMAIN,
        vec![
            TableEntry::new(1, 4, Resolver::text(
                "Совершайте бросок по этой таблице в начале каждого своего хода в течение следующей минуты, игнорируя результат «01–04».",
            )),
            TableEntry::new(5, 8, Resolver::pick(
                "Дружелюбное существо появляется в пределах 60 футов от вас: {}.",
                friendly_creatures(),
            )),
            TableEntry::new(9, 12, Resolver::text(
                "В течение следующей минуты вы восстанавливаете по 5 Хитов в начале каждого своего хода.",
            )),
            TableEntry::new(13, 16, Resolver::text(
                "Существа совершат с Помехой спасброски от следующего требующего спасброска заклинания, которое вы сотворите в течение следующей минуты",
            )),
            TableEntry::new(17, 20, Resolver::pick(
                "Вы подвергаетесь эффекту, который длится 1 минуту, если в описании не указано иное.\n{}",
                personal_effects(),
            )),
            TableEntry::new(21, 24, Resolver::text(
                "В течение следующей минуты все ваши заклинания со временем сотворения в действие считаются имеющими время сотворения в Бонусное действие.",
            )),
            TableEntry::new(25, 28, Resolver::text(
                "Вы перемещаетесь на Астральный план до конца своего следующего хода; после этого вы вернётесь в ранее занимаемое пространство, или ближайшее свободное пространство, если это пространство занято.",
            )),
            TableEntry::new(29, 32, Resolver::text(
                "Не совершайте бросков урона для следующего наложенного вами в течение 1 минуты заклинания, наносящего урон. Вместо этого используйте максимальное значение для каждой кости.",
            )),
            TableEntry::new(33, 36, Resolver::text(
                "В течение следующей минуты у вас есть Сопротивление всему урону.",
            )),
            TableEntry::new(37, 40, Resolver::text(
                "Вы превращаетесь в растение в горшке до начала вашего следующего хода. На это время вы получаете состояние Недееспособный и Уязвимость всему урону. Если ваши Хиты опускаются до 0, ваш горшок разбивается, и вы возвращаетесь в свой облик.",
            )),
            TableEntry::new(41, 44, Resolver::text(
                "В каждый свой ход в течение следующей минуты вы можете Бонусным действием телепортироваться на расстояние до 20 футов.",
            )),
            TableEntry::new(45, 48, Resolver::text(
                "Вы и до трёх существ в пределах 30 футов от вас на ваш выбор получают состояние Невидимый на 1 минуту. Это состояние заканчивается для существа, как только существо совершает атаку или сотворяет заклинание.",
            )),
            TableEntry::new(49, 52, Resolver::text(
                "В течение следующей минуты рядом с вами парит призрачный щит, даруя вам бонус +2 к КЗ и иммунитет к Волшебным стрелам.",
            )),
            TableEntry::new(53, 56, Resolver::text(
                "В этот ход вы можете совершить одно дополнительное действие.",
            )),
            TableEntry::new(57, 60, Resolver::pick(
                "Вы сотворяете случайное заклинание. Это заклинание не потребует Концентрации и действует свою полную длительность. {}",
                random_spells(),
            )),
            TableEntry::new(61, 64, Resolver::dice(
                "В течение следующей минуты любой воспламеняемый немагический объект, к которому вы прикасаетесь и который не несёт и не носит другое существо, получает {} урона Огнём и загорается.",
                D4,
            )),
            TableEntry::new(65, 68, Resolver::text(
                "Если вы умрёте в течение следующего часа, то мгновенно вернётесь к жизни, как если бы на вас сотворили Реинкарнацию.",
            )),
            TableEntry::new(69, 72, Resolver::text(
                "Вы получаете состояние Испуганный до конца вашего следующего хода. Мастер определяет источник вашего страха.",
            )),
            TableEntry::new(73, 76, Resolver::text(
                "Вы телепортируетесь в видимое вами незанятое пространство в пределах 60 футов от вас.",
            )),
            TableEntry::new(77, 80, Resolver::dice(
                "Случайное существо в пределах 60 футов от вас получает состояние Отравленный на {} часов.",
                D4,
            )),
            TableEntry::new(81, 84, Resolver::text(
                "В течение следующей минуты вы излучаете Яркий свет в радиусе 30 футов. Все существа, заканчивающие свой ход в пределах 5 футов от вас, получают состояние Ослеплённый до конца своего следующего хода.",
            )),
            TableEntry::new(85, 88, Resolver::dice(
                "Выберите до трёх существ, видимых вами в пределах 30 футов от вас. Каждое из существ получает {} Некротического урона, а вы восстанавливаете Хиты в количестве, равном сумме этого урона.",
                D10,
            )),
            TableEntry::new(89, 92, Resolver::dice(
                "Выберите до трёх существ, видимых вами в пределах 30 футов от вас; каждое из них получает {} урона Электричеством.",
                FOUR_D10,
            )),
            TableEntry::new(93, 96, Resolver::text(
                "Вы и все существа в пределах 30 футов от вас получаете Уязвимость к Колющему урону на 1 минуту.",
            )),
            TableEntry::new(97, 100, restorations()),
        ],
    )
}
