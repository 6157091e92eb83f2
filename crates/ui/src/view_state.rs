use easytv_domain::codes::ErrorCode;

/// Lifecycle of the data behind one screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ErrorCode),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorCode> {
        match self {
            ViewState::Failed(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easytv_domain::codes::ServerCode;

    #[test]
    fn test_accessors() {
        let mut state: ViewState<Vec<i32>> = ViewState::default();
        assert_eq!(state, ViewState::Idle);
        assert!(state.data().is_none());

        state = ViewState::Ready(vec![1]);
        state.data_mut().unwrap().push(2);
        assert_eq!(state.data(), Some(&vec![1, 2]));

        let failed: ViewState<()> = ViewState::Failed(ServerCode::NotFound.into());
        assert_eq!(failed.error(), Some(&ErrorCode::Server(ServerCode::NotFound)));
    }
}
