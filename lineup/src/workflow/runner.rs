use crate::workflow::config::LineupConfig;
use anyhow::Context;
use log::info;
use rfcascade::prelude::Stage;
use rfcascade::processing::{cascade, cascade_progressive};
use serde::Serialize;

/// Budget for one point along the chain: the cascade up to and including `name`.
#[derive(Debug, Clone, Serialize)]
pub struct RunningEntry {
    pub name: String,
    pub cascade: Stage,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineupReport {
    pub name: Option<String>,
    pub aggregate: Stage,
    pub running: Vec<RunningEntry>,
}

#[derive(Clone)]
pub struct Runner {
    config: LineupConfig,
}

impl Runner {
    pub fn new(config: LineupConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, progressive: bool) -> anyhow::Result<LineupReport> {
        let stages = self.config.to_stages();
        info!(
            "cascading {} stages over {} frequency points",
            stages.len(),
            self.config.frequency.len()
        );

        let aggregate = cascade(&stages).context("cascading lineup")?;

        let running = if progressive {
            let cascades =
                cascade_progressive(&stages).context("computing running cascade")?;
            self.config
                .stage_names()
                .into_iter()
                .zip(cascades)
                .map(|(name, cascade)| RunningEntry { name, cascade })
                .collect()
        } else {
            Vec::new()
        };

        Ok(LineupReport {
            name: self.config.name.clone(),
            aggregate,
            running,
        })
    }
}

impl LineupReport {
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.running {
            out.push_str(&format!("After {}:\n{}\n\n", entry.name, entry.cascade));
        }
        let title = self.name.as_deref().unwrap_or("lineup");
        out.push_str(&format!("Cascade of {}:\n{}\n", title, self.aggregate));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::StageEntry;

    fn receiver() -> LineupConfig {
        LineupConfig {
            name: Some("receiver".into()),
            frequency: vec![1.0e9],
            stages: vec![
                StageEntry {
                    name: "lna".into(),
                    gain: vec![10.0],
                    noise_figure: vec![3.0],
                    ..Default::default()
                },
                StageEntry {
                    name: "gain block".into(),
                    gain: vec![10.0],
                    noise_figure: vec![3.0],
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn runner_produces_aggregate() {
        let report = Runner::new(receiver()).execute(false).unwrap();
        assert_eq!(report.aggregate.gain(), &[20.0]);
        assert!((report.aggregate.noise_figure()[0] - 3.212).abs() < 1e-3);
        assert!(report.running.is_empty());
        assert!(report.render().contains("Cascade of receiver:"));
    }

    #[test]
    fn runner_names_running_entries() {
        let report = Runner::new(receiver()).execute(true).unwrap();
        let names: Vec<&str> = report.running.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["lna", "gain block"]);
        assert_eq!(report.running[0].cascade.gain(), &[10.0]);
        assert!(report.render().starts_with("After lna:"));
    }

    #[test]
    fn runner_surfaces_shape_errors() {
        let mut config = receiver();
        config.stages[1].gain = vec![10.0, 11.0];
        let err = Runner::new(config).execute(false).unwrap_err();
        assert!(format!("{:#}", err).contains("shape mismatch"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = Runner::new(receiver()).execute(false).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["aggregate"]["gain"][0], 20.0);
    }
}
