use slotmap::new_key_type;

new_key_type! {
    /// Handle to a `NoteSegment` stored in a `Journal`.
    pub struct SegmentKey;
}
