use clap::Parser;

use crate::profile::{Budget, CookingSkill, Cuisine, Equipment, Gender, Goal, Profile};

#[derive(Parser, Debug)]
#[command(
    name = "studentfit",
    version,
    about = "Generates a synchronized 7-day workout & meal plan for students"
)]
pub struct Args {
    /// Bio-data. Ranges mirror the collecting form.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(16..=40))]
    pub age: u32,

    #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(u32).range(40..=150))]
    pub weight_kg: u32,

    #[arg(long, default_value_t = 170, value_parser = clap::value_parser!(u32).range(140..=220))]
    pub height_cm: u32,

    #[arg(long, value_enum, default_value_t = Gender::Male)]
    pub gender: Gender,

    #[arg(long, value_enum, default_value_t = Goal::LoseWeight)]
    pub goal: Goal,

    #[arg(long, value_enum, default_value_t = Equipment::NoEquipment)]
    pub equipment: Equipment,

    #[arg(long, value_enum, default_value_t = Cuisine::Indian)]
    pub cuisine: Cuisine,

    #[arg(long, value_enum, default_value_t = Budget::Cheap)]
    pub budget: Budget,

    #[arg(long, value_enum, default_value_t = CookingSkill::MicrowaveOnly)]
    pub cooking_skill: CookingSkill,

    /// Force the canned demo plan even when credentials are present.
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Groq API key; falls back to the GROQ_API_KEY env var. Without a
    /// key the run degrades to demo mode.
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "llama-3.3-70b-versatile")]
    pub model: String,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    #[arg(long, default_value = ".")]
    pub root: String,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    pub fn profile(&self) -> Profile {
        Profile {
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            gender: self.gender,
            goal: self.goal,
            equipment: self.equipment,
            cuisine: self.cuisine,
            diet_type: Profile::DIET_TYPE.to_string(),
            budget: self.budget,
            cooking_skill: self.cooking_skill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form() {
        let args = Args::try_parse_from(["studentfit"]).unwrap();
        let p = args.profile();
        assert_eq!(p.age, 20);
        assert_eq!(p.weight_kg, 70);
        assert_eq!(p.height_cm, 170);
        assert_eq!(p.diet_type, "Standard");
        assert_eq!(p.goal, Goal::LoseWeight);
    }

    #[test]
    fn age_out_of_form_range_is_rejected() {
        assert!(Args::try_parse_from(["studentfit", "--age", "50"]).is_err());
        assert!(Args::try_parse_from(["studentfit", "--weight-kg", "20"]).is_err());
        assert!(Args::try_parse_from(["studentfit", "--height-cm", "139"]).is_err());
    }

    #[test]
    fn enum_aliases_parse() {
        let args =
            Args::try_parse_from(["studentfit", "--goal", "muscle", "--equipment", "gym"]).unwrap();
        assert_eq!(args.goal, Goal::BuildMuscle);
        assert_eq!(args.equipment, Equipment::FullGym);
    }
}
