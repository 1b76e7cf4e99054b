use crate::utils::error::{Result, SeedError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SeedError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SeedError::ValidationError {
            message: format!(
                "{} = {} must be between {} and {}",
                field_name, value, min, max
            ),
        });
    }
    Ok(())
}

/// 值會被直接包在單引號裡，不能含有單引號
pub fn validate_sql_literal(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\'') {
        return Err(SeedError::ValidationError {
            message: format!("{} contains a single quote: {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let invalid = || SeedError::ValidationError {
        message: format!("{} is not a valid email: {}", field_name, value),
    };

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// `#` 對應一個數字，其餘字元必須完全相同
pub fn validate_mask(field_name: &str, value: &str, mask: &str) -> Result<()> {
    let matches = value.chars().count() == mask.chars().count()
        && value.chars().zip(mask.chars()).all(|(v, m)| match m {
            '#' => v.is_ascii_digit(),
            _ => v == m,
        });

    if !matches {
        return Err(SeedError::ValidationError {
            message: format!("{} '{}' does not match mask '{}'", field_name, value, mask),
        });
    }
    Ok(())
}
