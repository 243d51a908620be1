use super::evolution_engine::ProgressCallback;
use super::generation::CycleOutcome;

pub struct LogProgressCallback {
    pub total_generations: usize,
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {}/{} starting...", generation + 1, self.total_generations);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, outcome: &CycleOutcome) {
        log::info!(
            "Generation {}/{} complete. Best fitness: {:.6}, offspring: {}, barren: {}",
            generation + 1,
            self.total_generations,
            best_fitness,
            outcome.offspring,
            outcome.barren
        );
    }
}

// For observers on another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best_fitness: f64,
        outcome: CycleOutcome,
    },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, outcome: &CycleOutcome) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            outcome: *outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_forwards_messages() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut callback = ChannelProgressCallback::new(tx);

        callback.on_generation_start(0);
        let outcome = CycleOutcome { offspring: 3, barren: 1 };
        callback.on_generation_complete(0, -0.5, &outcome);
        drop(callback);

        let messages: Vec<ProgressMessage> = rx.iter().collect();
        assert_eq!(
            messages,
            vec![
                ProgressMessage::GenerationStart(0),
                ProgressMessage::GenerationComplete {
                    generation: 0,
                    best_fitness: -0.5,
                    outcome,
                },
            ]
        );
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        let mut callback = ChannelProgressCallback::new(tx);
        callback.on_generation_start(1);
    }
}
