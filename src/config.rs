//! JSON runtime configuration for the `staff_lines` tool.
use crate::detector::StaffParams;
use crate::error::{Result, StaffError};
use crate::image::Polarity;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub cleaned_image: Option<PathBuf>,
    pub overlay_image: Option<PathBuf>,
    pub histogram_image: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub polarity: Polarity,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: StaffParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StaffError::Config(format!("failed to read config {}: {e}", path.display()))
    })?;
    parse_config(&contents)
        .map_err(|e| StaffError::Config(format!("failed to parse config {}: {e}", path.display())))
}

pub fn parse_config(json: &str) -> Result<RuntimeConfig> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::erase::EraseStrategy;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "page.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("page.png"));
        assert_eq!(cfg.polarity, Polarity::LightInk);
        assert!(cfg.output.json_out.is_none());
        assert_eq!(cfg.params.trace.pixel_weight, 5.0);
        assert_eq!(cfg.params.erase.min_stable_paths, 5);
        assert_eq!(cfg.params.locator.slice_start, 0.45);
    }

    #[test]
    fn overrides_nested_params() {
        let cfg = parse_config(
            r#"{
                "input": "page.png",
                "polarity": "darkInk",
                "output": { "jsonOut": "out/report.json", "cleanedImage": "out/clean.png" },
                "params": {
                    "trace": { "bandMargin": 0.25 },
                    "erase": { "strategy": "lineMap", "thicknessTolerance": 1.5 }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.polarity, Polarity::DarkInk);
        assert_eq!(cfg.output.cleaned_image, Some(PathBuf::from("out/clean.png")));
        assert_eq!(cfg.params.trace.band_margin, 0.25);
        assert_eq!(cfg.params.trace.pixel_weight, 5.0);
        assert_eq!(cfg.params.erase.strategy, EraseStrategy::LineMap);
        assert_eq!(cfg.params.erase.thickness_tolerance, 1.5);
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(matches!(parse_config("{}"), Err(StaffError::Json(_))));
    }
}
