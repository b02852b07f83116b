use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The display strings below are embedded verbatim in the coach prompt,
/// so they must stay exactly as the form labels read.

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    #[value(alias = "lose")]
    LoseWeight,
    #[value(alias = "muscle")]
    BuildMuscle,
    #[value(alias = "shred")]
    GetShredded,
    #[value(alias = "stress")]
    ExamStressRelief,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::LoseWeight => "Lose Weight",
            Goal::BuildMuscle => "Build Muscle",
            Goal::GetShredded => "Get Shredded",
            Goal::ExamStressRelief => "Exam Stress Relief",
        };
        f.write_str(s)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    #[value(alias = "dorm", alias = "none")]
    NoEquipment,
    #[value(alias = "dumbbells")]
    DumbbellsOnly,
    #[value(alias = "gym")]
    FullGym,
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Equipment::NoEquipment => "No Equipment (Dorm)",
            Equipment::DumbbellsOnly => "Dumbbells Only",
            Equipment::FullGym => "Full Gym",
        };
        f.write_str(s)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Indian,
    Global,
    Mediterranean,
    Asian,
    Vegan,
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cuisine::Indian => "Indian",
            Cuisine::Global => "Global",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::Asian => "Asian",
            Cuisine::Vegan => "Vegan",
        };
        f.write_str(s)
    }
}

/// Ordinal: Cheap < Moderate < Premium.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Cheap,
    Moderate,
    Premium,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Budget::Cheap => "Cheap ($)",
            Budget::Moderate => "Moderate ($$)",
            Budget::Premium => "Premium ($$$)",
        };
        f.write_str(s)
    }
}

/// Ordinal: MicrowaveOnly < BasicStove < FullChef.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CookingSkill {
    #[value(alias = "microwave")]
    MicrowaveOnly,
    #[value(alias = "stove")]
    BasicStove,
    #[value(alias = "chef")]
    FullChef,
}

impl fmt::Display for CookingSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CookingSkill::MicrowaveOnly => "Microwave Only",
            CookingSkill::BasicStove => "Basic Stove",
            CookingSkill::FullChef => "Full Chef",
        };
        f.write_str(s)
    }
}

/// One student's preferences, built fresh per generation and never
/// mutated afterwards. Numeric bounds are enforced at the CLI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub weight_kg: u32,
    pub height_cm: u32,
    pub gender: Gender,
    pub goal: Goal,
    pub equipment: Equipment,
    pub cuisine: Cuisine,
    pub diet_type: String,
    pub budget: Budget,
    pub cooking_skill: CookingSkill,
}

impl Profile {
    pub const DIET_TYPE: &'static str = "Standard";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_form_strings() {
        assert_eq!(Goal::LoseWeight.to_string(), "Lose Weight");
        assert_eq!(Goal::ExamStressRelief.to_string(), "Exam Stress Relief");
        assert_eq!(Equipment::NoEquipment.to_string(), "No Equipment (Dorm)");
        assert_eq!(Budget::Cheap.to_string(), "Cheap ($)");
        assert_eq!(Budget::Premium.to_string(), "Premium ($$$)");
        assert_eq!(CookingSkill::MicrowaveOnly.to_string(), "Microwave Only");
        assert_eq!(Cuisine::Mediterranean.to_string(), "Mediterranean");
    }

    #[test]
    fn ordinals_are_ordered() {
        assert!(Budget::Cheap < Budget::Moderate);
        assert!(Budget::Moderate < Budget::Premium);
        assert!(CookingSkill::MicrowaveOnly < CookingSkill::FullChef);
    }
}
