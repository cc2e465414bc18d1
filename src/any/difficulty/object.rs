/// A difficulty object that knows its position within the list of all
/// difficulty objects of a map.
pub trait IDifficultyObject: Sized {
    /// The index of this object within the list of difficulty objects.
    fn idx(&self) -> usize;

    /// The difficulty object `backwards_idx + 1` positions before this one.
    ///
    /// `backwards_idx == 0` yields the immediately preceding object. Returns
    /// `None` if there is no such object.
    fn previous<'a>(&self, backwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }
}
