use anyhow::Result;
use dialoguer::{Input, Password, Select};
use crate::config::StoreConfig;

pub fn prompt_store_name(default_name: Option<String>) -> Result<String> {
    if let Some(name) = default_name {
        Ok(name)
    } else {
        let name = Input::<String>::new()
            .with_prompt("Store name (e.g., 'production', 'dev-store')")
            .interact()?;
        Ok(name)
    }
}

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_overwrite_confirmation(store_name: &str) -> Result<bool> {
    prompt_confirmation(&format!("Store '{}' already exists. Overwrite?", store_name), false)
}

pub fn prompt_remove_confirmation(store_name: &str) -> Result<bool> {
    prompt_confirmation(&format!("Remove store '{}'?", store_name), false)
}

/// Ask for whatever connection details were not given on the command line
pub fn prompt_store_config(
    shop_domain: Option<String>,
    access_token: Option<String>,
    api_version: Option<String>,
) -> Result<StoreConfig> {
    let shop_domain = match shop_domain {
        Some(domain) => domain,
        None => Input::<String>::new()
            .with_prompt("Shop domain (e.g., your-store.myshopify.com)")
            .interact()?,
    };

    let access_token = match access_token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Admin API access token")
            .interact()?,
    };

    Ok(StoreConfig {
        shop_domain: shop_domain.trim().to_string(),
        access_token: access_token.trim().to_string(),
        api_version,
    })
}

pub fn prompt_store_selection(store_names: &[String], current_store: Option<&str>) -> Result<String> {
    let items: Vec<String> = store_names
        .iter()
        .map(|name| {
            if current_store == Some(name.as_str()) {
                format!("{} (current)", name)
            } else {
                name.clone()
            }
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Select store")
        .items(&items)
        .interact()?;

    Ok(store_names[selection].clone())
}
