use crate::profile::Profile;

/// Builds the coach prompt. Every profile field is embedded, and the
/// format instructions must stay aligned with the markers the parser
/// recognizes ("Day:", "Workout:", "Meal:", "GROCERY", "|||").
pub fn coach_prompt(profile: &Profile) -> String {
    format!(
        r#"Act as a fitness coach for a student.
Profile: {age}y/o, {gender}, {weight}kg, {height}cm.
Goal: {goal}. Equipment: {equipment}.
Diet: {diet} ({cuisine}), Budget: {budget}.
Cooking: {cooking}.

TASK: Create a 7-day plan (Monday-Sunday).

STRICT OUTPUT FORMAT (Do not deviate):
For each day, output a block separated by "|||".
Inside each block, use "Day:", "Workout:", and "Meal:" labels exactly.

Example format:
Day: Monday
Workout:
* **Focus:** Chest
* **Exercise:** Pushups (3x12)
Meal:
* **Breakfast:** Oats
* **Lunch:** Rice
|||
Day: Tuesday
...
|||
GROCERY
#### 🛒 Shopping List (1 Person)
* [Quantity] [Item]
#### 💡 Tips
* [Tip]
#### 💰 Estimated Budget
* Estimate the weekly cost in the currency relevant to the Cuisine selected (e.g., INR for Indian, USD for Global/US, EUR for Mediterranean).
* Also provide a rough USD conversion.

Begin immediately."#,
        age = profile.age,
        gender = profile.gender,
        weight = profile.weight_kg,
        height = profile.height_cm,
        goal = profile.goal,
        equipment = profile.equipment,
        diet = profile.diet_type,
        cuisine = profile.cuisine,
        budget = profile.budget,
        cooking = profile.cooking_skill,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Budget, CookingSkill, Cuisine, Equipment, Gender, Goal};

    fn sample_profile() -> Profile {
        Profile {
            age: 22,
            weight_kg: 81,
            height_cm: 184,
            gender: Gender::Other,
            goal: Goal::GetShredded,
            equipment: Equipment::DumbbellsOnly,
            cuisine: Cuisine::Asian,
            diet_type: Profile::DIET_TYPE.to_string(),
            budget: Budget::Moderate,
            cooking_skill: CookingSkill::BasicStove,
        }
    }

    #[test]
    fn prompt_embeds_every_profile_field() {
        let p = sample_profile();
        let text = coach_prompt(&p);
        assert!(text.contains("22y/o"));
        assert!(text.contains("81kg"));
        assert!(text.contains("184cm"));
        assert!(text.contains("Other"));
        assert!(text.contains("Get Shredded"));
        assert!(text.contains("Dumbbells Only"));
        assert!(text.contains("Standard (Asian)"));
        assert!(text.contains("Moderate ($$)"));
        assert!(text.contains("Basic Stove"));
    }

    #[test]
    fn prompt_pins_the_block_convention() {
        let text = coach_prompt(&sample_profile());
        assert!(text.contains(r#"separated by "|||""#));
        assert!(text.contains(r#""Day:", "Workout:", and "Meal:" labels exactly"#));
        assert!(text.contains("GROCERY"));
    }
}
