use entity::scrum_scrum_user::Model as UserModel;

use crate::types::error::AppError;

/// Users may only update their own record.
pub fn update_own_user(actor: &UserModel, target: &UserModel) -> Result<(), AppError> {
    if actor.id == target.id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
