use crosshair_code_core::{
    console_commands, decode_share_code, encode_crosshair, from_ui_config, to_ui_config,
    Crosshair, UiConfig,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DecodeResult<'a> {
    crosshair: &'a Crosshair,
    config: UiConfig,
    checksum_ok: bool,
}

fn parse_ui_config(config_json: &str) -> Result<UiConfig, String> {
    serde_json::from_str(config_json).map_err(|e| format!("invalid ui config: {e}"))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("json encode failed: {e}"))
}

fn decode_share_code_internal(code: &str) -> Result<String, String> {
    let decoded = decode_share_code(code.trim()).map_err(|e| format!("invalid share code: {e}"))?;
    to_json(&DecodeResult {
        crosshair: &decoded.crosshair,
        config: to_ui_config(&decoded.crosshair),
        checksum_ok: decoded.checksum_ok(),
    })
}

fn parse_share_code_internal(code: &str) -> Result<String, String> {
    let config = crosshair_code_core::parse_share_code(code.trim())
        .map_err(|e| format!("invalid share code: {e}"))?;
    to_json(&config)
}

fn encode_ui_config_internal(config_json: &str) -> Result<String, String> {
    let config = parse_ui_config(config_json)?;
    Ok(encode_crosshair(&from_ui_config(&config)))
}

fn encode_crosshair_internal(crosshair_json: &str) -> Result<String, String> {
    let crosshair: Crosshair =
        serde_json::from_str(crosshair_json).map_err(|e| format!("invalid crosshair: {e}"))?;
    Ok(encode_crosshair(&crosshair))
}

fn console_commands_internal(config_json: &str) -> Result<String, String> {
    let config = parse_ui_config(config_json)?;
    to_json(&console_commands(&from_ui_config(&config)))
}

/// Decodes a share code into `{crosshair, config, checksumOk}` JSON.
#[wasm_bindgen]
pub fn decode(code: &str) -> Result<String, JsValue> {
    decode_share_code_internal(code).map_err(|e| JsValue::from_str(&e))
}

/// Decodes a share code into UI configuration JSON.
#[wasm_bindgen]
pub fn parse_share_code(code: &str) -> Result<String, JsValue> {
    parse_share_code_internal(code).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn encode_ui_config(config_json: &str) -> Result<String, JsValue> {
    encode_ui_config_internal(config_json).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn encode_record(crosshair_json: &str) -> Result<String, JsValue> {
    encode_crosshair_internal(crosshair_json).map_err(|e| JsValue::from_str(&e))
}

/// Console commands for a UI configuration, as a JSON array of strings.
#[wasm_bindgen]
pub fn console_commands_for(config_json: &str) -> Result<String, JsValue> {
    console_commands_internal(config_json).map_err(|e| JsValue::from_str(&e))
}
