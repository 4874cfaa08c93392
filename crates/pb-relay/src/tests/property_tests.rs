use crate::{Event, EventRouter, WhiteboardEvent};

use proptest::prelude::*;
use serde_json::json;

// =========================================================================
// Property-Based Tests - Classification
// =========================================================================

proptest! {
    #[test]
    fn given_finite_coordinates_when_classified_then_stroke_preserved(
        x0 in -1.0e6f64..1.0e6,
        y0 in -1.0e6f64..1.0e6,
        x1 in -1.0e6f64..1.0e6,
        y1 in -1.0e6f64..1.0e6,
    ) {
        let raw = json!({
            "event": "whiteboardEvent",
            "data": { "x0": x0, "y0": y0, "x1": x1, "y1": y1 }
        });

        let event = EventRouter::new().classify(&raw.to_string()).unwrap();

        match event {
            Event::Whiteboard(WhiteboardEvent::Stroke(stroke)) => {
                prop_assert_eq!(stroke.x0, x0);
                prop_assert_eq!(stroke.y0, y0);
                prop_assert_eq!(stroke.x1, x1);
                prop_assert_eq!(stroke.y1, y1);
            }
            other => prop_assert!(false, "expected stroke, got {:?}", other),
        }
    }

    #[test]
    fn given_string_coordinate_when_classified_then_rejected(coord in "[a-z]{1,12}") {
        let raw = json!({
            "event": "whiteboardEvent",
            "data": { "x0": coord, "y0": 0.0, "x1": 1.0, "y1": 1.0 }
        });

        prop_assert!(EventRouter::new().classify(&raw.to_string()).is_err());
    }

    #[test]
    fn given_random_event_name_when_classified_then_rejected(name in "[a-zA-Z]{1,24}") {
        if name != "taskUpdated" && name != "whiteboardEvent" {
            let raw = json!({ "event": name, "data": { "id": 1 } });
            prop_assert!(EventRouter::new().classify(&raw.to_string()).is_err());
        }
    }

    #[test]
    fn given_arbitrary_text_when_classified_then_never_panics(raw in ".{0,256}") {
        // Rejection is fine; a crash is not
        let _ = EventRouter::new().classify(&raw);
    }

    #[test]
    fn given_arbitrary_task_object_when_classified_then_passthrough(
        id in any::<u32>(),
        title in ".{0,60}",
        completed in any::<bool>(),
    ) {
        let snapshot = json!({ "id": id, "title": title, "completed": completed });
        let raw = json!({ "event": "taskUpdated", "data": snapshot.clone() });

        let event = EventRouter::new().classify(&raw.to_string()).unwrap();

        prop_assert_eq!(event, Event::Task(snapshot));
    }
}
