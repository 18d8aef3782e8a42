use crate::core::types::State;

pub trait FromRandom {
    fn from_random() -> Self;
}

impl FromRandom for State {
    fn from_random() -> Self {
        State(random_string(32))
    }
}

fn random_string(size: usize) -> String {
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(rand::distributions::Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_url_safe() {
        let state = State::from_random();
        assert_eq!(state.0.len(), 32);
        assert!(state.0.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn states_differ() {
        assert_ne!(State::from_random(), State::from_random());
    }
}
