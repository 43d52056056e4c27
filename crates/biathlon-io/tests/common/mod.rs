//! Shared race data for the integration tests.

pub const SPRINT_CONFIG: &str = r#"{
    "laps": 2,
    "lapLen": 3651,
    "penaltyLen": 50,
    "firingLines": 1,
    "start": "09:30:00",
    "startDelta": "00:00:30"
}"#;

pub const SPRINT_EVENTS: &str = "\
[09:05:59.867] 1 1
[09:06:00.000] 1 2
[09:06:01.000] 1 3
[09:10:00.000] 42 2
[09:15:00.841] 2 1 09:30:00.000
[09:15:01.000] 2 2 09:32:00.000
[09:15:02.000] 2 3 09:31:00.000
[09:29:45.734] 3 1
[09:30:01.005] 4 1
[09:32:00.500] 4 2
[09:49:31.659] 5 1 1
[09:49:33.123] 6 1 1
[09:49:34.650] 6 1 2
[09:49:35.937] 6 1 4
[09:49:37.364] 6 1 5
[09:49:38.339] 7 1
[09:49:55.915] 8 1
[09:50:00.000] 10 2
[09:51:48.391] 9 1
[09:59:03.872] 10 1
[09:59:03.872] 11 1 Lost in the forest
[10:08:00.000] 10 2
";
