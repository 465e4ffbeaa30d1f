use eyre::Result;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::{Actor, WorkerResult};

#[derive(Default)]
pub struct ActorsManager {
    tasks: Vec<JoinHandle<WorkerResult>>,
}

impl ActorsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, actor: impl Actor + 'static) -> Result<()> {
        match actor.start() {
            Ok(workers) => {
                info!("{} started successfully", actor.name());
                self.tasks.extend(workers);
                Ok(())
            }
            Err(e) => {
                error!("Error starting {} : {}", actor.name(), e);
                Err(e)
            }
        }
    }

    pub async fn wait(self) {
        let mut remaining = self.tasks;

        while !remaining.is_empty() {
            let (result, _index, rest) = futures::future::select_all(remaining).await;
            match result {
                Ok(Ok(msg)) => info!("ActorWorker {_index} finished : {msg}"),
                Ok(Err(e)) => error!("ActorWorker {_index} error : {e}"),
                Err(e) => error!("ActorWorker join error {_index} : {e}"),
            }
            remaining = rest;
        }
    }
}
