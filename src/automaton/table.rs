use owo_colors::OwoColorize;

use crate::prelude::*;

impl<Q: State, S: Symbol> Automaton<Q, S> {
    /// Returns a string representation of the transition table of the automaton. There is a column for every
    /// label (including ε if it is used) and a row for every state. Initial states are marked with `->` and
    /// final states with `*`. Each cell contains the set of successors, or `-` if there are none.
    pub fn transition_table(&self) -> String {
        self.build_transition_table(|initial, accepting, state| {
            format!(
                "{}{}{}",
                if initial { "->" } else { "" },
                if accepting { "*" } else { "" },
                state.show()
            )
        })
    }

    /// Works like [`Self::transition_table`], but highlights the markers of initial and final states
    /// using ANSI colors, which is useful when printing to a terminal.
    pub fn colored_transition_table(&self) -> String {
        self.build_transition_table(|initial, accepting, state| {
            format!(
                "{}{}{}",
                if initial { "->".bold().to_string() } else { String::new() },
                if accepting { "*".green().to_string() } else { String::new() },
                state.show()
            )
        })
    }

    fn build_transition_table<SD>(&self, state_decorator: SD) -> String
    where
        SD: Fn(bool, bool, &Q) -> String,
    {
        let mut labels: Vec<Label<S>> = self.alphabet.iter().cloned().collect();
        if self.has_epsilon_transitions() && !self.alphabet.contains(&Label::Epsilon) {
            labels.insert(0, Label::Epsilon);
        }

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(labels.iter().map(|label| label.show())),
        );
        for state in &self.states {
            let mut row = vec![state_decorator(
                self.is_initial(state),
                self.is_final(state),
                state,
            )];
            for label in &labels {
                match self.edges_from(state).and_then(|edges| edges.get(label)) {
                    Some(targets) => row.push(Q::show_collection(targets)),
                    None => row.push("-".to_string()),
                }
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}
