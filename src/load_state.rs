#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum LoadState {
  Error,
  #[default]
  Idle,
  /// Rendered markup blocks, newest comment first.
  Loaded(Vec<String>),
  Loading,
}
