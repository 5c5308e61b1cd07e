use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use facefollow_core::perception::domain::detection::Detection;
use facefollow_core::shared::bounding_box::BoundingBox;
use facefollow_core::shared::geometry::FrameGeometry;

fn default_frame_interval_ms() -> u64 {
    33
}

/// A scripted perception timeline: what the detector would have reported,
/// frame by frame, plus where the operator toggles tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub frame_width: u32,
    pub frame_height: u32,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    pub frames: Vec<ScenarioFrame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioFrame {
    /// Toggle tracking before this frame is observed.
    #[serde(default)]
    pub toggle: bool,
    #[serde(default)]
    pub detections: Vec<ScenarioDetection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDetection {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub confidence: f64,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read scenario {}: {e}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .map_err(|e| format!("cannot parse scenario {}: {e}", path.display()))?;
        Ok(scenario)
    }

    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry::new(self.frame_width, self.frame_height)
    }

    /// Built-in demo on an 800×600 frame: tracking starts on the first
    /// frame, the face pans from the left half to the right half, drops
    /// out for a few frames, then reappears smaller so the depth axis
    /// closes in.
    pub fn demo() -> Self {
        let mut frames = Vec::new();

        // Face holds still left of center while tracking engages and the
        // reference diagonal is captured.
        for i in 0..10 {
            frames.push(ScenarioFrame {
                toggle: i == 0,
                detections: vec![face(150.0, 200.0, 200.0)],
            });
        }

        // Pan across the center line into the right half.
        for i in 0..20 {
            let x = 150.0 + i as f64 * 20.0;
            frames.push(ScenarioFrame {
                toggle: false,
                detections: vec![face(x, 200.0, 200.0)],
            });
        }

        // Detection gap: the controller should hold position.
        for _ in 0..6 {
            frames.push(ScenarioFrame::default());
        }

        // The face comes back smaller (farther away): close in.
        for _ in 0..10 {
            frames.push(ScenarioFrame {
                toggle: false,
                detections: vec![face(350.0, 250.0, 100.0)],
            });
        }

        Self {
            frame_width: 800,
            frame_height: 600,
            frame_interval_ms: default_frame_interval_ms(),
            frames,
        }
    }
}

impl ScenarioFrame {
    /// The frame's detections as domain values.
    pub fn to_detections(&self) -> Vec<Detection> {
        self.detections
            .iter()
            .map(|d| {
                Detection::new(
                    BoundingBox::new(d.min_x, d.min_y, d.max_x, d.max_y),
                    d.confidence,
                )
            })
            .collect()
    }
}

/// Square face box at the given top-left corner.
fn face(x: f64, y: f64, size: f64) -> ScenarioDetection {
    ScenarioDetection {
        min_x: x,
        min_y: y,
        max_x: x + size,
        max_y: y + size,
        confidence: 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_scenario() {
        let json = r#"{
            "frame_width": 800,
            "frame_height": 600,
            "frames": [
                { "toggle": true, "detections": [
                    { "min_x": 100, "min_y": 100, "max_x": 300, "max_y": 300, "confidence": 0.9 }
                ]},
                {}
            ]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.frame_interval_ms, 33);
        assert_eq!(scenario.frames.len(), 2);
        assert!(scenario.frames[0].toggle);
        assert!(scenario.frames[1].detections.is_empty());
    }

    #[test]
    fn test_frame_converts_to_domain_detections() {
        let frame = ScenarioFrame {
            toggle: false,
            detections: vec![ScenarioDetection {
                min_x: 10.0,
                min_y: 20.0,
                max_x: 30.0,
                max_y: 40.0,
                confidence: 0.8,
            }],
        };
        let detections = frame.to_detections();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].bounding_box.min_y(), 20.0);
        assert!(detections[0].qualifies());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "frame_width": 640, "frame_height": 480, "frames": [] }}"#
        )
        .unwrap();
        let scenario = Scenario::load(file.path()).unwrap();
        assert_eq!(scenario.geometry(), FrameGeometry::new(640, 480));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Scenario::load(Path::new("/nonexistent/scenario.json")).is_err());
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Scenario::load(file.path()).is_err());
    }

    #[test]
    fn test_demo_scenario_is_well_formed() {
        let demo = Scenario::demo();
        assert!(demo.frames.iter().any(|f| f.toggle));
        assert!(demo.frames.iter().any(|f| f.detections.is_empty()));

        let geometry = demo.geometry();
        for frame in &demo.frames {
            for d in frame.to_detections() {
                assert!(d.qualifies());
                assert!(d.bounding_box.max_x() < geometry.width as f64);
                assert!(d.bounding_box.max_y() < geometry.height as f64);
            }
        }
    }
}
