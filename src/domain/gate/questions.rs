//! Clarifying question selection.
//!
//! Questions target the sparsest profile fields first: the buckets the
//! conversation said least about are where another turn helps most.

use crate::domain::foundation::ProfileField;
use crate::domain::profile::PreferenceProfile;

/// Returns the canned clarifying question for a field.
fn question_for(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Skills => "Which skills do you feel strongest in, at school or elsewhere?",
        ProfileField::Interests => "What topics could you spend hours exploring without getting bored?",
        ProfileField::CareerGoals => "What does career success look like to you?",
        ProfileField::SubjectsEnjoyed => "What subjects or activities do you find most engaging?",
        ProfileField::Values => "What matters most to you in the work you do?",
        ProfileField::WorkEnvironment => "What type of work environment helps you perform your best?",
        ProfileField::PersonalityTraits => "How would people who know you well describe you?",
        ProfileField::Hobbies => "What do you like to do in your free time?",
        ProfileField::Dislikes => "Is there any kind of work you already know you want to avoid?",
    }
}

/// Selects up to `max` clarifying questions for a profile.
///
/// Fields with the fewest terms come first; ties break by field
/// priority, so the selection is deterministic. Always returns at
/// least one question for `max >= 1` since there are eight candidate
/// fields.
pub fn select_questions(profile: &PreferenceProfile, max: usize) -> Vec<String> {
    profile
        .fields_by_sparseness()
        .into_iter()
        .take(max)
        .map(|field| question_for(field).to_string())
        .collect()
}
