use anyhow::Context;
use rfcascade::prelude::{Metric, Stage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One component of the lineup as written in YAML. Omitted metrics are empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageEntry {
    pub name: String,
    pub gain: Vec<f64>,
    pub noise_figure: Vec<f64>,
    pub input_p1db: Vec<f64>,
    pub input_ip2: Vec<f64>,
    pub input_ip3: Vec<f64>,
    pub input_pmax: Vec<f64>,
}

/// Ordered signal chain sharing a single frequency axis (Hz).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineupConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub frequency: Vec<f64>,
    pub stages: Vec<StageEntry>,
}

impl LineupConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading lineup {}", path_ref.display()))?;
        let config: LineupConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing lineup {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn stage_names(&self) -> Vec<String> {
        self.stages
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                if entry.name.is_empty() {
                    format!("stage {}", idx)
                } else {
                    entry.name.clone()
                }
            })
            .collect()
    }

    /// Builds engine stages, each carrying the shared frequency axis.
    pub fn to_stages(&self) -> Vec<Stage> {
        self.stages
            .iter()
            .map(|entry| {
                Stage::builder()
                    .metric(Metric::Frequency, self.frequency.clone())
                    .metric(Metric::Gain, entry.gain.clone())
                    .metric(Metric::NoiseFigure, entry.noise_figure.clone())
                    .metric(Metric::InputP1db, entry.input_p1db.clone())
                    .metric(Metric::InputIp2, entry.input_ip2.clone())
                    .metric(Metric::InputIp3, entry.input_ip3.clone())
                    .metric(Metric::InputPmax, entry.input_pmax.clone())
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"name: rx front end\nfrequency: [1.0e9, 2.0e9]\nstages:\n  - name: lna\n    gain: [20.0, 19.0]\n    noise_figure: [1.0, 1.2]\n  - gain: [-3.0, -3.5]\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = LineupConfig::load(&path).unwrap();

        assert_eq!(cfg.name.as_deref(), Some("rx front end"));
        assert_eq!(cfg.stages.len(), 2);
        assert!(cfg.stages[1].noise_figure.is_empty());
        assert_eq!(cfg.stage_names(), vec!["lna".to_string(), "stage 1".to_string()]);
    }

    #[test]
    fn to_stages_shares_frequency_axis() {
        let cfg = LineupConfig {
            name: None,
            frequency: vec![5.8e9],
            stages: vec![
                StageEntry {
                    name: "filter".into(),
                    gain: vec![-1.5],
                    ..Default::default()
                },
                StageEntry {
                    name: "amp".into(),
                    gain: vec![15.0],
                    input_ip3: vec![0.0],
                    ..Default::default()
                },
            ],
        };
        let stages = cfg.to_stages();
        assert_eq!(stages.len(), 2);
        assert!(stages.iter().all(|s| s.frequency() == [5.8e9]));
        assert_eq!(stages[1].input_ip3(), &[0.0]);
    }

    #[test]
    fn bundled_receiver_lineup_cascades() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/receiver.yaml");
        let cfg = LineupConfig::load(path).unwrap();
        let stages = cfg.to_stages();
        assert_eq!(stages.len(), 3);
        assert!(stages.iter().all(|s| s.validate().is_ok()));

        let aggregate = rfcascade::cascade(&stages).unwrap();
        assert_eq!(aggregate.num_points(), 6);
        // Referred back through the filter and LNA, the mixer compresses first.
        assert!((aggregate.input_p1db()[0] - (5.0 - 17.3)).abs() < 1e-9);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = LineupConfig::load("/nonexistent/lineup.yaml").unwrap_err();
        assert!(err.to_string().contains("reading lineup"));
    }
}
