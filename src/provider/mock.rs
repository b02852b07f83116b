use async_trait::async_trait;
use std::time::Duration;

use crate::errors::PlanError;
use crate::profile::Profile;

pub const SOURCE_SIMULATION: &str = "Simulation";

/// Canned two-day plan in the split block format. Also serves as the
/// reference input for end-to-end parser tests.
pub const PLAN_FIXTURE: &str = "\
Day: Monday
Workout: * **Push:** Pushups (3x12)
* **Core:** Plank (45s)
Meal: * **Breakfast:** Oats
* **Lunch:** Lentils
|||
Day: Tuesday
Workout: * **Legs:** Squats (3x15)
* **Cardio:** Jog (15m)
Meal: * **Breakfast:** Eggs
* **Lunch:** Rice
|||
GROCERY
#### 🛒 Shopping List
* 1 Dozen Eggs
* 1kg Rice
* 500g Oats
#### 💰 Estimated Budget
* Approx. ₹800 - ₹1200 INR (Indian Pricing)
* Approx. $15 - $20 USD (Global Standard)
";

/// Simulated backend: returns the fixture after a short delay that
/// stands in for model latency. The profile is ignored on purpose,
/// which is what makes the output deterministic.
pub struct MockProvider {
    delay: Duration,
}

impl MockProvider {
    pub fn new() -> Self {
        Self { delay: Duration::from_millis(1500) }
    }

    /// Zero-delay variant for tests.
    pub fn instant() -> Self {
        Self { delay: Duration::ZERO }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::Provider for MockProvider {
    async fn request_plan(&self, _profile: &Profile, _debug: bool) -> Result<String, PlanError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(PLAN_FIXTURE.to_string())
    }

    fn source(&self) -> &'static str {
        SOURCE_SIMULATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan;
    use crate::profile::{Budget, CookingSkill, Cuisine, Equipment, Gender, Goal};
    use crate::provider::Provider;

    fn any_profile() -> Profile {
        Profile {
            age: 20,
            weight_kg: 70,
            height_cm: 170,
            gender: Gender::Female,
            goal: Goal::BuildMuscle,
            equipment: Equipment::FullGym,
            cuisine: Cuisine::Vegan,
            diet_type: Profile::DIET_TYPE.to_string(),
            budget: Budget::Premium,
            cooking_skill: CookingSkill::FullChef,
        }
    }

    #[tokio::test]
    async fn simulation_is_byte_identical_across_calls() {
        let prov = MockProvider::instant();
        let a = prov.request_plan(&any_profile(), false).await.unwrap();
        let b = prov.request_plan(&any_profile(), false).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a, PLAN_FIXTURE);
    }

    #[tokio::test]
    async fn fixture_parses_end_to_end() {
        let prov = MockProvider::instant();
        let raw = prov.request_plan(&any_profile(), false).await.unwrap();
        let week = plan::parse(&raw);
        assert_eq!(week.days.len(), 2);
        assert_eq!(week.days[0].day, "Monday");
        assert_eq!(week.days[1].day, "Tuesday");
        assert!(week.has_grocery());
        assert!(week.grocery.contains("Shopping List"));
        assert!(week.days[0].workout.contains("Pushups (3x12)"));
        assert!(week.days[1].meal.contains("Eggs"));
    }
}
