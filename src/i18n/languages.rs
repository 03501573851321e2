use super::{Caption, LanguageEntry, UiLabels};
use crate::gloss::GlossTable;

pub const DEFAULT_LANGUAGE: &str = "ja";

const SOUND_ON: &str = "🔊";
const SOUND_OFF: &str = "🔇";

/// All languages shipped with the book, in menu order.
pub fn builtin() -> Vec<LanguageEntry> {
    vec![japanese(), english(), spanish(), french(), chinese(), korean()]
}

fn book(pages: [Caption; 5]) -> [Caption; 7] {
    let [p1, p2, p3, p4, p5] = pages;

    [Caption::EMPTY, p1, p2, p3, p4, p5, Caption::EMPTY]
}

fn japanese() -> LanguageEntry {
    LanguageEntry {
        code: "ja",
        name: "日本語",
        flag: "🇯🇵",
        ui: UiLabels {
            prev: "前のページ",
            next: "次のページ",
            sound_on: SOUND_ON,
            sound_off: SOUND_OFF,
            language: "言語",
        },
        captions: book([
            Caption::single("友達と笑って過ごした楽しい一日。"),
            Caption::single("海で泳いで楽しかった夏の思い出。"),
            Caption::single("公園で遊んだ最高の日。"),
            Caption::split(
                "お化けになった先生が怖かったけど、いい思い出になったおばけやしき。",
                ["お化けになった先生が怖かったけど、", "いい思い出になったおばけやしき。"],
            ),
            Caption::split(
                "たくさん練習してパパとママに見てもらったにじいろステージ。思い出がたくさん。",
                ["たくさん練習してパパとママに見てもらった", "にじいろステージ。思い出がたくさん。"],
            ),
        ]),
        glosses: [
            ('友', "とも"),
            ('達', "だち"),
            ('笑', "わら"),
            ('海', "うみ"),
            ('泳', "およ"),
            ('楽', "たの"),
            ('思', "おも"),
            ('出', "で"),
            ('公', "こう"),
            ('園', "えん"),
            ('遊', "あそ"),
            ('最', "さい"),
            ('高', "こう"),
            ('日', "ひ"),
            ('化', "ば"),
            ('先', "せん"),
            ('生', "せい"),
            ('怖', "こわ"),
            ('館', "かん"),
            ('練', "れん"),
            ('習', "しゅう"),
            ('見', "み"),
            ('虹', "にじ"),
            ('色', "いろ"),
            ('舞', "ぶ"),
            ('台', "たい"),
        ]
        .into_iter()
        .collect(),
    }
}

fn english() -> LanguageEntry {
    LanguageEntry {
        code: "en",
        name: "English",
        flag: "🇺🇸",
        ui: UiLabels {
            prev: "Previous",
            next: "Next",
            sound_on: SOUND_ON,
            sound_off: SOUND_OFF,
            language: "Language",
        },
        captions: book([
            Caption::single("A fun day spent laughing with friends."),
            Caption::single("Summer memories of swimming in the sea."),
            Caption::single("The best day playing in the park."),
            Caption::single(
                "The ghost teacher was scary, but the haunted house became a good memory.",
            ),
            Caption::single(
                "The rainbow stage where I practiced a lot and showed it to mom and dad. So many memories.",
            ),
        ]),
        glosses: GlossTable::new(),
    }
}

fn spanish() -> LanguageEntry {
    LanguageEntry {
        code: "es",
        name: "Español",
        flag: "🇪🇸",
        ui: UiLabels {
            prev: "Anterior",
            next: "Siguiente",
            sound_on: SOUND_ON,
            sound_off: SOUND_OFF,
            language: "Idioma",
        },
        captions: book([
            Caption::single("Un día divertido riendo con amigos."),
            Caption::single("Recuerdos de verano nadando en el mar."),
            Caption::single("El mejor día jugando en el parque."),
            Caption::single(
                "El profesor fantasma daba miedo, pero la casa embrujada se convirtió en un buen recuerdo.",
            ),
            Caption::single(
                "El escenario arcoíris donde practiqué mucho y se lo mostré a mamá y papá. Tantos recuerdos.",
            ),
        ]),
        glosses: GlossTable::new(),
    }
}

fn french() -> LanguageEntry {
    LanguageEntry {
        code: "fr",
        name: "Français",
        flag: "🇫🇷",
        ui: UiLabels {
            prev: "Précédent",
            next: "Suivant",
            sound_on: SOUND_ON,
            sound_off: SOUND_OFF,
            language: "Langue",
        },
        captions: book([
            Caption::single("Une journée amusante passée à rire avec des amis."),
            Caption::single("Souvenirs d'été de baignade dans la mer."),
            Caption::single("Le meilleur jour à jouer dans le parc."),
            Caption::single(
                "Le professeur fantôme était effrayant, mais la maison hantée est devenue un bon souvenir.",
            ),
            Caption::single(
                "La scène arc-en-ciel où j'ai beaucoup pratiqué et l'ai montré à maman et papa. Tant de souvenirs.",
            ),
        ]),
        glosses: GlossTable::new(),
    }
}

fn chinese() -> LanguageEntry {
    LanguageEntry {
        code: "zh",
        name: "中文",
        flag: "🇨🇳",
        ui: UiLabels {
            prev: "上一页",
            next: "下一页",
            sound_on: SOUND_ON,
            sound_off: SOUND_OFF,
            language: "语言",
        },
        captions: book([
            Caption::single("和朋友们欢笑的美好一天。"),
            Caption::single("在海里游泳的夏日回忆。"),
            Caption::single("在公园玩耍的最美好的一天。"),
            Caption::single("变成幽灵的老师很可怕，但是鬼屋成了美好的回忆。"),
            Caption::single("努力练习后在爸爸妈妈面前表演的彩虹舞台。好多回忆。"),
        ]),
        glosses: GlossTable::new(),
    }
}

fn korean() -> LanguageEntry {
    LanguageEntry {
        code: "ko",
        name: "한국어",
        flag: "🇰🇷",
        ui: UiLabels {
            prev: "이전",
            next: "다음",
            sound_on: SOUND_ON,
            sound_off: SOUND_OFF,
            language: "언어",
        },
        captions: book([
            Caption::single("친구들과 웃으며 보낸 즐거운 하루."),
            Caption::single("바다에서 수영한 여름 추억."),
            Caption::single("공원에서 놀았던 최고의 날."),
            Caption::single("유령이 된 선생님이 무서웠지만, 좋은 추억이 된 귀신의 집."),
            Caption::single("열심히 연습해서 엄마와 아빠에게 보여준 무지개 무대. 많은 추억들."),
        ]),
        glosses: GlossTable::new(),
    }
}
