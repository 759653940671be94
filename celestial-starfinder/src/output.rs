use crate::error::Result;
use crate::session::OutputFormat;
use celestial_stars::{Position, Star};
use serde::Serialize;

/// Neighbor results plus the point they were measured from.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborReport {
    pub origin: Position,
    pub stars: Vec<Star>,
}

impl NeighborReport {
    pub fn distance(&self, star: &Star) -> f64 {
        self.origin.squared_distance(&star.position()).sqrt()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Ids => Ok(render_ids(&self.stars)),
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_table(&self) -> String {
        let mut lines = Vec::with_capacity(self.stars.len());
        for (i, star) in self.stars.iter().enumerate() {
            lines.push(format!(
                "{:4}: {:>10} {:<24} X={:>12.5} Y={:>12.5} Z={:>12.5} Dist={:.5}",
                i + 1,
                star.id(),
                star.name(),
                star.x(),
                star.y(),
                star.z(),
                self.distance(star),
            ));
        }
        lines.join("\n")
    }

    fn render_json(&self) -> Result<String> {
        let rows: Vec<JsonNeighbor<'_>> = self
            .stars
            .iter()
            .map(|star| JsonNeighbor {
                star,
                distance: self.distance(star),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}

#[derive(Serialize)]
struct JsonNeighbor<'a> {
    #[serde(flatten)]
    star: &'a Star,
    distance: f64,
}

fn render_ids(stars: &[Star]) -> String {
    stars
        .iter()
        .map(|s| s.id().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
