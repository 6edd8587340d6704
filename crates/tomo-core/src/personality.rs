//! Personality types: colors and descriptive text.
//!
//! A personality string is a main type followed by a subtype, e.g.
//! `"easygoing dreamer"` or `"independent free spirit"`.

use serde::Serialize;

/// Fill used when a personality cannot be resolved.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// One of the four main personality types.
#[derive(Debug, Serialize)]
pub struct PersonalityGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub overall: &'static str,
    pub character: &'static str,
    pub subtypes: &'static [PersonalitySubtype],
}

/// One of the sixteen subtypes.
#[derive(Debug, Serialize)]
pub struct PersonalitySubtype {
    pub label: &'static str,
    /// Full personality string this subtype matches.
    pub value: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const PERSONALITY_GROUPS: &[PersonalityGroup] = &[
    PersonalityGroup {
        id: "easygoing",
        label: "Easygoing",
        color: "#febe28",
        overall: "Relaxed, open minded, empathetic.",
        character: "Does things at his/her own pace in a genuinely honest and kind manner.",
        subtypes: &[
            PersonalitySubtype {
                label: "Dreamer",
                value: "easygoing dreamer",
                color: "#ffc740",
                description: "Idealistic and romantic. Often has his/her head in the clouds… but also comes up with a lot of great ideas as a result.",
            },
            PersonalitySubtype {
                label: "Optimist",
                value: "easygoing optimist",
                color: "#ff9695",
                description: "Positive, enthusiastic, and always beaming. He/she smiles at everyone, and loves to make sure everyone else has a good time too.",
            },
            PersonalitySubtype {
                label: "Softie",
                value: "easygoing softie",
                color: "#fdaba8",
                description: "Sensitive, emotional, and very in tune with the feelings of those around him/her. Empathetic, and also quite sentimental.",
            },
            PersonalitySubtype {
                label: "Buddy",
                value: "easygoing buddy",
                color: "#ffe761",
                description: "Trustworthy and considerate. Puts his/her friends first, and works hard to make sure everyone gets along with each other.",
            },
        ],
    },
    PersonalityGroup {
        id: "outgoing",
        label: "Outgoing",
        color: "#fc7976",
        overall: "Social, charming, energetic.",
        character: "Comfortable in almost any situation, and makes new connections easily.",
        subtypes: &[
            PersonalitySubtype {
                label: "Leader",
                value: "outgoing leader",
                color: "#ff5100",
                description: "Assertive and highly regarded. Has great faith in his/her own instincts, and has no trouble earning the respect of others.",
            },
            PersonalitySubtype {
                label: "Entertainer",
                value: "outgoing entertainer",
                color: "#f00001",
                description: "Bold and captivating. Able to light up a room with his/her wit and charm. There's never a dull moment when he/she's around.",
            },
            PersonalitySubtype {
                label: "Charmer",
                value: "outgoing charmer",
                color: "#ff6e00",
                description: "Outgoing and extremely pleasant to be around. Able to make friends easily and turn almost any problem into a positive situation.",
            },
            PersonalitySubtype {
                label: "Trendsetter",
                value: "outgoing trendsetter",
                color: "#ff1e83",
                description: "Radiant and always on form. Has an effortless style that is admired by all. Able to easily adapt to new situations.",
            },
        ],
    },
    PersonalityGroup {
        id: "confident",
        label: "Confident",
        color: "#8d9fff",
        overall: "Organized, motivated, focused.",
        character: "Tackles any challenge head-on, and has great faith in his/her own abilities.",
        subtypes: &[
            PersonalitySubtype {
                label: "Adventurer",
                value: "confident adventurer",
                color: "#945bf8",
                description: "Risk taking and ambitious. Full of energy, and does almost everything with a sense of purpose and excitement. Once started, nobody can stop him/her!",
            },
            PersonalitySubtype {
                label: "Brainiac",
                value: "confident brainiac",
                color: "#0065ff",
                description: "Highly intelligent and not afraid to show it. Knowledgeable about a wide array of subjects, and confident answering almost any question.",
            },
            PersonalitySubtype {
                label: "Designer",
                value: "confident designer",
                color: "#0196fc",
                description: "Diligent, productive, and highly efficient. A master at coming up with a plan and putting that plan into action.",
            },
            PersonalitySubtype {
                label: "Go-getter",
                value: "confident go-getter",
                color: "#5a3df9",
                description: "A determined self-starter. Cuts his/her own path in life, and doesn't let anything stand in his/her way. Quick and daring to jump into action.",
            },
        ],
    },
    PersonalityGroup {
        id: "independent",
        label: "Independent",
        color: "#67ab8c",
        overall: "Creative, self-reliant, somewhat reserved.",
        character: "Comfortable doing his/her own thing and thinking outside the box.",
        subtypes: &[
            PersonalitySubtype {
                label: "Artist",
                value: "independent artist",
                color: "#63be44",
                description: "Imaginative and inspired. Happiest when creating something. Able to find beauty in everyone and everything around him/her.",
            },
            PersonalitySubtype {
                label: "Free Spirit",
                value: "independent free spirit",
                color: "#63a064",
                description: "Unique, carefree, and creative. Laid back and does things his/her own way. Self-reliant and always thinking way outside the box.",
            },
            PersonalitySubtype {
                label: "Lone Wolf",
                value: "independent lone wolf",
                color: "#598181",
                description: "Self-sufficient and highly individual. Doesn't show a lot of emotion, but has a lot going on deep down.",
            },
            PersonalitySubtype {
                label: "Thinker",
                value: "independent thinker",
                color: "#599495",
                description: "Thoughtful and introspective. Great at thinking things all the way through and analyzing issues from every angle.",
            },
        ],
    },
];

/// A personality string resolved against the tables.
#[derive(Debug, Serialize)]
pub struct PersonalityInfo {
    pub main: Option<&'static PersonalityGroup>,
    pub subtype: Option<&'static PersonalitySubtype>,
    /// Main type as written, capitalized (`"Easygoing"`).
    pub main_name: String,
    /// Subtype label when known, else the raw remainder.
    pub subtype_name: String,
}

impl PersonalityInfo {
    /// Subtype color, then main type color, then the fallback.
    pub fn color(&self) -> &'static str {
        self.subtype
            .map(|s| s.color)
            .or(self.main.map(|m| m.color))
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// Split a personality string into main type and subtype and look both up.
pub fn describe(personality_type: &str) -> PersonalityInfo {
    let mut words = personality_type.split_whitespace();
    let main_word = words.next().unwrap_or_default();
    let rest = words.collect::<Vec<_>>().join(" ");

    let main = PERSONALITY_GROUPS
        .iter()
        .find(|g| g.id.eq_ignore_ascii_case(main_word));
    let subtype = PERSONALITY_GROUPS
        .iter()
        .flat_map(|g| g.subtypes.iter())
        .find(|s| s.label.eq_ignore_ascii_case(&rest));

    PersonalityInfo {
        main,
        subtype,
        main_name: capitalize(main_word),
        subtype_name: subtype.map_or(rest, |s| s.label.to_string()),
    }
}

/// Arc fill for a character's personality.
pub fn fill_color(personality_type: &str) -> &'static str {
    if personality_type.trim().is_empty() {
        return FALLBACK_COLOR;
    }
    describe(personality_type).color()
}

/// Color of a filter value: a group id or a full subtype value.
pub fn color_for_value(value: &str) -> Option<&'static str> {
    let value = value.trim().to_lowercase();
    if value.is_empty() || value == "all" {
        return None;
    }
    PERSONALITY_GROUPS.iter().find_map(|g| {
        if g.id == value {
            Some(g.color)
        } else {
            g.subtypes.iter().find(|s| s.value == value).map(|s| s.color)
        }
    })
}

/// Group a full subtype value belongs to.
pub fn group_for_value(value: &str) -> Option<&'static PersonalityGroup> {
    let value = value.trim().to_lowercase();
    PERSONALITY_GROUPS
        .iter()
        .find(|g| g.subtypes.iter().any(|s| s.value == value))
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
