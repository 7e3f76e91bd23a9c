//! Intent dispatch and the spoken responses for each intent.

use shared::{
    build_speechlet_response, Error, FoodClient, FoodLookup, Intent, NutritionRecord, Result,
    SpeechletResponse,
};
use std::str::FromStr;
use tracing::{error, info, warn};

/// Slot carrying the requested food on `FindFood`.
const FOOD_SLOT: &str = "food";

/// Card title used when there is no food name to show.
const SKILL_TITLE: &str = "Indian Food";

const WELCOME_TEXT: &str =
    "Welcome to Indian Food. Please tell me which food you want to know nutrition facts of.";
const WELCOME_REPROMPT: &str = "Which food do you want to know about?";
const FAREWELL_TEXT: &str =
    "Thank you for trying Indian Food. Hope this helped you. Have a nice day!";
const MISSING_FOOD_TEXT: &str = "I'm not sure which food you are looking for.";
const CONNECTION_FAILED_TEXT: &str =
    "Sorry, I could not connect to the Indian Food service. Please try again later.";
const NO_RANDOM_FOOD_TEXT: &str =
    "Sorry, I could not find any food right now. Please try again later.";

/// Intents this skill handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIntent {
    FindFood,
    RandomFood,
    Help,
    /// Stop and cancel end the session the same way
    Stop,
}

impl FromStr for SkillIntent {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "FindFood" => Ok(Self::FindFood),
            "RandomFood" => Ok(Self::RandomFood),
            "AMAZON.HelpIntent" => Ok(Self::Help),
            "AMAZON.StopIntent" | "AMAZON.CancelIntent" => Ok(Self::Stop),
            other => Err(Error::InvalidIntent(other.to_string())),
        }
    }
}

/// Run the behavior for an intent.
///
/// Unknown intent names are an error. Lookup problems are not: they become
/// spoken apologies so the user always hears something.
pub async fn dispatch(food_client: &FoodClient, intent: &Intent) -> Result<SpeechletResponse> {
    let response = match intent.name.parse::<SkillIntent>()? {
        SkillIntent::FindFood => find_food(food_client, intent).await,
        SkillIntent::RandomFood => random_food(food_client).await,
        SkillIntent::Help => welcome(),
        SkillIntent::Stop => farewell(),
    };

    Ok(response)
}

/// Greeting used on launch and for help.
pub fn welcome() -> SpeechletResponse {
    build_speechlet_response(
        "Welcome",
        WELCOME_TEXT,
        WELCOME_TEXT,
        Some(WELCOME_REPROMPT),
        false,
    )
}

/// Goodbye used for stop and cancel.
pub fn farewell() -> SpeechletResponse {
    build_speechlet_response("Session Ended", FAREWELL_TEXT, FAREWELL_TEXT, None, true)
}

async fn find_food(food_client: &FoodClient, intent: &Intent) -> SpeechletResponse {
    let food = match intent.slot_value(FOOD_SLOT) {
        Some(food) => food,
        None => {
            info!("No food given for {}", intent.name);
            return build_speechlet_response(
                &intent.name,
                MISSING_FOOD_TEXT,
                MISSING_FOOD_TEXT,
                None,
                false,
            );
        }
    };

    info!("Food: {}", food);

    match food_client.find_food(food).await {
        Ok(FoodLookup::Found(record)) => nutrition_facts(&record, false),
        Ok(FoodLookup::NotFound) => {
            warn!("No nutrition facts for {}", food);
            let speech = format!("Sorry, I could not find nutrition facts for {}.", food);
            build_speechlet_response(&intent.name, &speech, &speech, None, true)
        }
        Err(e) => {
            error!("Food lookup for {} failed: {}", food, e);
            connection_failed(&intent.name)
        }
    }
}

async fn random_food(food_client: &FoodClient) -> SpeechletResponse {
    match food_client.any_food().await {
        Ok(FoodLookup::Found(record)) => nutrition_facts(&record, true),
        Ok(FoodLookup::NotFound) => {
            warn!("Food service returned no random food");
            build_speechlet_response(
                SKILL_TITLE,
                NO_RANDOM_FOOD_TEXT,
                NO_RANDOM_FOOD_TEXT,
                None,
                true,
            )
        }
        Err(e) => {
            error!("Random food lookup failed: {}", e);
            connection_failed(SKILL_TITLE)
        }
    }
}

fn connection_failed(title: &str) -> SpeechletResponse {
    build_speechlet_response(title, CONNECTION_FAILED_TEXT, CONNECTION_FAILED_TEXT, None, true)
}

/// Facts for a found record. `suggested` marks a random pick.
fn nutrition_facts(record: &NutritionRecord, suggested: bool) -> SpeechletResponse {
    let name = record.spoken_name();

    let mut speech = format!(
        "Nutrition facts of {} are as follows. \
         Fat: {} grams, Carbs: {} grams, Protein: {} grams, Calories: {}",
        name, record.fat_in_gm, record.carb_in_gm, record.protein_in_gm, record.calories
    );
    if suggested {
        speech = format!("How about {}? {}", name, speech);
    }

    let card = format!(
        "Fat: {} grams\nCarbs: {} grams\nProtein: {} grams\nCalories: {}",
        record.fat_in_gm, record.carb_in_gm, record.protein_in_gm, record.calories
    );

    build_speechlet_response(&name, &card, &speech, None, true)
}
