/// Effects the event loop performs after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
}
