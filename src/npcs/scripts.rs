//! Scouter dialogue scripts and who speaks them.
//!
//! Lines use two markup delimiters: a backslash toggles highlighting and a
//! newline forces a break.

use crate::shared::*;

/// Which script a session is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptId {
    /// The quest script for the given stage.
    Quest(u8),
    /// A Scouter's own idle script.
    Idle(ScouterName),
}

/// Side effects applied when a script plays past its last line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptEffect {
    pub grant: Option<ItemKind>,
    /// Advance the quest line, guarded on the script's own stage.
    pub advance_from: Option<u8>,
}

const IDLE_BRYANT: &[&str] = &[
    "Watch out for those mosquitoes!\n\nHere is a \\Racket\\ to help you stay safe out there.",
];

const IDLE_HUBERT: &[&str] = &[
    "Have you ever eaten raw fish before?",
    "Shannon fished up our dinner tonight!",
    "Also, have you seen \n\\Braydon\\, he needs to help me prepare the fish.",
];

const IDLE_BRAYDON: &[&str] = &[
    "Ah man, you lost a \\Flint And Steel\\ again?",
    "Alright here is another one.",
];

const QUEST_SCRIPTS: [&[&str]; 8] = [
    &[
        "Welcome to Camp Haliburton! I'm \\Scouter Bryant\\ and I will be helping you get around camp.",
        "Firstly, mosquitoes are quite abundant around here and can take a toll on your health.",
        "Make sure to use a \n\\Racket\\ to swat away the mosquitoes by pressing \\K\\.",
        "Why don't you try it out by swatting \\10\\\nmosquitoes.",
        "Here is your racket, if you are in need of another, either me or \\Scouter Hubert\\ to the right can give you one.",
    ],
    &[
        "Hello, I'm \\Scouter Hubert\\. Now that you can protect yourself against mosquitoes, could you help me with something?",
        "We are making fish for dinner and we have a \\Fish Carcass\\ to get rid off.",
        "Could you help me drop it off at the dock?",
        "You can press \\Q\\ to drop an item from your inventory.",
    ],
    &[
        "An important scouting skill is to be able to make fire.",
        "The first step is to gather \\Tinder\\ and \\Kindling\\, which are necessary to make a fire start. \\Tinder\\ is lit first and then \\Kindling\\ will catch on and burn longer.",
        "\\Tinder\\ can be \\Leaves,\\ \\Birch Bark,\\ or \\Cotton Balls,\\ while \\Kindling\\ is normally smaller \\Sticks\\.",
        "Press \\L\\ to pick up these items on the ground, then press \\L\\ when selecting the item to add it to the fire, and report back to me when you have finished adding both \\Tinder\\ and \\Kindling\\ to the campfire.",
    ],
    &[
        "The next step is to light the fire itself.",
        "We commonly do this with matches but I can't seem to find where they are.",
        "Instead, you can use a \\Flint And Steel.\\ To get this, go and find \\Braydon.\\ Once you get it, return to me and I will tell you how to light the fire.",
        "I think that he is over by the cotton field.",
    ],
    &[
        "Hullo, I am just trying to light my fire here. I just can't seem to find anything other than cotton...",
        "Oh, \\Scouter Bryant\\ sent you here to get a \\Flint And Steel?\\",
        "Well, here you go! If you ever lose it, just come back here and ask me.",
    ],
    &[
        "Now that you have the \\Flint And Steel,\\ you can light the fire.",
        "Press \\L\\ while selecting the \\Flint And Steel\\ nearby a campfire to light it.",
        "Go and try it out!",
    ],
    &[
        "That's all the activities that I have for now, but there is one more thing.",
        "I heard that there is a \\Porta-potty\\ at our camp, but I could never find it.",
        "If you want, go out and explore more of our camp and try and find the \\Porta-potty.\\",
    ],
    &[
        "That's everything. Thanks for playing through Harry's experiences at \\Camp Haliburton!\\",
        "You can try to set out to reach the highscore leaderboard. Hope you enjoyed the game!",
    ],
];

/// The Scouter who delivers the quest script at `stage`.
pub fn quest_speaker(stage: u8) -> ScouterName {
    match stage {
        QUEST_DELIVER_FISH => ScouterName::Hubert,
        QUEST_FETCH_FLINT => ScouterName::Braydon,
        _ => ScouterName::Bryant,
    }
}

/// What `name` says when talked to at quest `stage`.
pub fn choose_script(name: ScouterName, stage: u8) -> ScriptId {
    let stage = stage.min(FINAL_QUEST_STAGE);
    if quest_speaker(stage) == name {
        return ScriptId::Quest(stage);
    }
    match name {
        // Once the fish errand is behind him, Hubert hands out rackets too.
        ScouterName::Hubert if stage >= QUEST_FEED_CAMPFIRE && stage != QUEST_FETCH_FLINT => {
            ScriptId::Idle(ScouterName::Bryant)
        }
        other => ScriptId::Idle(other),
    }
}

impl ScriptId {
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            ScriptId::Quest(stage) => QUEST_SCRIPTS[stage.min(FINAL_QUEST_STAGE) as usize],
            ScriptId::Idle(ScouterName::Bryant) => IDLE_BRYANT,
            ScriptId::Idle(ScouterName::Hubert) => IDLE_HUBERT,
            ScriptId::Idle(ScouterName::Braydon) => IDLE_BRAYDON,
        }
    }

    pub fn completion(self) -> ScriptEffect {
        match self {
            ScriptId::Quest(QUEST_SWAT_MOSQUITOES) => ScriptEffect {
                grant: Some(ItemKind::Racket),
                advance_from: None,
            },
            ScriptId::Quest(QUEST_DELIVER_FISH) => ScriptEffect {
                grant: Some(ItemKind::FishCarcass),
                advance_from: None,
            },
            ScriptId::Quest(QUEST_FIND_BRAYDON) => ScriptEffect {
                grant: None,
                advance_from: Some(QUEST_FIND_BRAYDON),
            },
            ScriptId::Quest(QUEST_FETCH_FLINT) => ScriptEffect {
                grant: Some(ItemKind::FlintAndSteel),
                advance_from: Some(QUEST_FETCH_FLINT),
            },
            ScriptId::Idle(ScouterName::Bryant) => ScriptEffect {
                grant: Some(ItemKind::Racket),
                advance_from: None,
            },
            ScriptId::Idle(ScouterName::Braydon) => ScriptEffect {
                grant: Some(ItemKind::FlintAndSteel),
                advance_from: None,
            },
            _ => ScriptEffect::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_speakers() {
        let expected = [
            ScouterName::Bryant,
            ScouterName::Hubert,
            ScouterName::Bryant,
            ScouterName::Bryant,
            ScouterName::Braydon,
            ScouterName::Bryant,
            ScouterName::Bryant,
            ScouterName::Bryant,
        ];
        for (stage, name) in expected.iter().enumerate() {
            assert_eq!(quest_speaker(stage as u8), *name, "speaker at stage {}", stage);
            assert_eq!(choose_script(*name, stage as u8), ScriptId::Quest(stage as u8));
        }
    }

    #[test]
    fn test_hubert_falls_back_to_racket_script() {
        assert_eq!(choose_script(ScouterName::Hubert, 0), ScriptId::Idle(ScouterName::Hubert));
        assert_eq!(choose_script(ScouterName::Hubert, 4), ScriptId::Idle(ScouterName::Hubert));
        for stage in [2, 3, 5, 6, 7] {
            assert_eq!(
                choose_script(ScouterName::Hubert, stage),
                ScriptId::Idle(ScouterName::Bryant),
                "stage {}",
                stage
            );
        }
        assert_eq!(choose_script(ScouterName::Braydon, 2), ScriptId::Idle(ScouterName::Braydon));
        assert_eq!(choose_script(ScouterName::Bryant, 1), ScriptId::Idle(ScouterName::Bryant));
    }

    #[test]
    fn test_completion_effects() {
        assert_eq!(ScriptId::Quest(0).completion().grant, Some(ItemKind::Racket));
        assert_eq!(ScriptId::Quest(1).completion().grant, Some(ItemKind::FishCarcass));
        assert_eq!(ScriptId::Quest(3).completion().advance_from, Some(3));
        let braydon = ScriptId::Quest(4).completion();
        assert_eq!(braydon.grant, Some(ItemKind::FlintAndSteel));
        assert_eq!(braydon.advance_from, Some(4));
        assert_eq!(ScriptId::Quest(7).completion(), ScriptEffect::default());
        assert_eq!(ScriptId::Idle(ScouterName::Hubert).completion(), ScriptEffect::default());
    }

    #[test]
    fn test_every_script_has_lines() {
        for stage in 0..=FINAL_QUEST_STAGE {
            assert!(!ScriptId::Quest(stage).lines().is_empty());
        }
        assert_eq!(ScriptId::Quest(0).lines().len(), 5);
        assert_eq!(ScriptId::Idle(ScouterName::Hubert).lines().len(), 3);
    }
}
