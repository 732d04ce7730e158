//! Static gesture table and the output CSV schema.

/// Gesture folder name to the control action it stands for.
pub const GESTURES: [(&str, &str); 8] = [
    ("c1", "increase_volume"),
    ("c2", "decrease_volume"),
    ("c3", "mute_mic"),
    ("c4", "unmute_mic"),
    ("c5", "turn_off_camera"),
    ("c6", "turn_on_camera"),
    ("c7", "ask_to_talk"),
    ("c8", "end_call"),
];

pub const ID_COLUMN: &str = "id_user";

/// Header of the annotation file, in order.
pub const COLUMNS: [&str; 33] = [
    "id_user",
    "c1_type",
    "c1_num",
    "c1_increase_volume",
    "c1_description",
    "c2_type",
    "c2_num",
    "c2_decrease_volume",
    "c2_description",
    "c3_type",
    "c3_num",
    "c3_mute_mic",
    "c3_description",
    "c4_type",
    "c4_num",
    "c4_unmute_mic",
    "c4_description",
    "c5_type",
    "c5_num",
    "c5_turn_off_camera",
    "c5_description",
    "c6_type",
    "c6_num",
    "c6_turn_on_camera",
    "c6_description",
    "c7_type",
    "c7_num",
    "c7_ask_to_talk",
    "c7_description",
    "c8_type",
    "c8_num",
    "c8_end_call",
    "c8_description",
];

/// Looks up the action label for a gesture folder name. Exact match only.
pub fn action_label(gesture: &str) -> Option<&'static str> {
    GESTURES
        .iter()
        .find(|(name, _)| *name == gesture)
        .map(|(_, label)| *label)
}

/// Name of the column holding the action label for `gesture`.
///
/// Mapped gestures take the name declared in [`COLUMNS`]; anything else
/// gets `{gesture}_`, since its label is empty.
pub fn label_column(gesture: &str) -> String {
    let index = GESTURES.iter().position(|(name, _)| *name == gesture);
    match index {
        Some(i) => COLUMNS[1 + i * 4 + 2].to_string(),
        None => format!("{gesture}_"),
    }
}
