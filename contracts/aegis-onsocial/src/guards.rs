use near_sdk::{env, NearToken};

use crate::errors::AegisError;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub(crate) fn check_one_yocto() -> Result<(), AegisError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(AegisError::RequiresOneYocto);
    }
    Ok(())
}
