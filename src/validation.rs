use crate::shared::UserDataError;

/// Minimum allowed star rating
pub const MIN_RATING: u8 = 1;
/// Maximum allowed star rating
pub const MAX_RATING: u8 = 5;
/// Maximum review length in characters (not bytes)
pub const MAX_REVIEW_LENGTH: usize = 1000;

/// Game ids come from the catalog and are always positive.
pub fn validate_game_id(game_id: i64) -> Result<(), UserDataError> {
    if game_id > 0 {
        Ok(())
    } else {
        Err(UserDataError::InvalidGameId(game_id))
    }
}

pub fn validate_rating(rating: u8) -> Result<(), UserDataError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(UserDataError::InvalidRating(rating))
    }
}

/// Length is counted in characters so multi-byte text gets the same
/// budget the user sees, not a byte budget.
pub fn validate_review_text(review_text: &str) -> Result<(), UserDataError> {
    let length = review_text.chars().count();
    if length == 0 {
        return Err(UserDataError::EmptyReview);
    }
    if length > MAX_REVIEW_LENGTH {
        return Err(UserDataError::ReviewTooLong {
            length,
            max: MAX_REVIEW_LENGTH,
        });
    }
    Ok(())
}

pub fn validate_activity_limit(limit: usize) -> Result<(), UserDataError> {
    if limit == 0 {
        return Err(UserDataError::Validation(
            "Activity limit must be positive".to_string(),
        ));
    }
    Ok(())
}
