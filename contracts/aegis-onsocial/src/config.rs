use near_sdk::near;

use crate::errors::AegisError;

pub const DEFAULT_MAX_POST_LENGTH: u32 = 280;
pub const DEFAULT_MAX_NUM_ATTACHMENTS: u32 = 4;
pub const DEFAULT_MAX_DISPLAY_NAME_LENGTH: u32 = 64;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Content limits, fixed at initialization. Lengths are in bytes.
#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct AegisConfig {
    pub max_post_length: u32,
    pub max_num_attachments: u32,
    pub max_display_name_length: u32,
}

impl Default for AegisConfig {
    fn default() -> Self {
        Self {
            max_post_length: DEFAULT_MAX_POST_LENGTH,
            max_num_attachments: DEFAULT_MAX_NUM_ATTACHMENTS,
            max_display_name_length: DEFAULT_MAX_DISPLAY_NAME_LENGTH,
        }
    }
}

impl AegisConfig {
    pub fn validate(&self) -> Result<(), AegisError> {
        if self.max_post_length == 0 {
            return Err(AegisError::InvalidConfig(
                "max_post_length must be positive".into(),
            ));
        }
        if self.max_display_name_length == 0 {
            return Err(AegisError::InvalidConfig(
                "max_display_name_length must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn check_display_name(&self, display_name: &str) -> Result<(), AegisError> {
        if display_name.is_empty() {
            return Err(AegisError::EmptyDisplayName);
        }
        if display_name.len() > self.max_display_name_length as usize {
            return Err(AegisError::DisplayNameTooLong {
                max: self.max_display_name_length,
                actual: display_name.len() as u64,
            });
        }
        Ok(())
    }

    pub fn check_post(&self, text: &str, attachments: &[String]) -> Result<(), AegisError> {
        if text.len() > self.max_post_length as usize {
            return Err(AegisError::PostTooLong {
                max: self.max_post_length,
                actual: text.len() as u64,
            });
        }
        if attachments.len() > self.max_num_attachments as usize {
            return Err(AegisError::TooManyAttachments {
                max: self.max_num_attachments,
                actual: attachments.len() as u64,
            });
        }
        Ok(())
    }
}
