use eyre::{eyre, Result};
use tokio::task::JoinHandle;
use tracing::info;

use crate::channels::Broadcaster;
use crate::shared_state::SharedState;

/// Final message a worker loop exits with.
pub type WorkerResult = Result<String>;

pub type ActorResult = Result<Vec<JoinHandle<WorkerResult>>>;

pub trait Actor {
    fn start(&self) -> ActorResult;

    fn name(&self) -> &'static str;

    fn wait(&self, handles: ActorResult) -> Result<()> {
        let handles = handles?;
        let actor_name = self.name();
        futures::executor::block_on(async {
            for handle in handles {
                match handle.await {
                    Ok(Ok(msg)) => info!("Worker of '{actor_name}' finished : {msg}"),
                    Ok(Err(e)) => return Err(eyre!("Worker of '{actor_name}' failed : {e}")),
                    Err(e) => return Err(eyre!("Worker join failed for '{actor_name}' : {e}")),
                }
            }
            Ok(())
        })
    }
}

pub trait Producer<T>
where
    T: Sync + Send + Clone,
{
    fn produce(&mut self, _broadcaster: Broadcaster<T>) -> &mut Self {
        panic!("Not implemented");
    }
}

pub trait Consumer<T>
where
    T: Sync + Send + Clone,
{
    fn consume(&mut self, _receiver: Broadcaster<T>) -> &mut Self {
        panic!("Not implemented");
    }
}

pub trait Accessor<T> {
    fn access(&mut self, _data: SharedState<T>) -> &mut Self {
        panic!("Not implemented");
    }
}
