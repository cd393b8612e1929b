use crate::domain::constants::RULE_WIDTH;
use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}
