use tokio::sync::broadcast;
use tokio::sync::broadcast::error::SendError;
use tokio::sync::broadcast::Receiver;

/// Fan-out channel between actors. Cloning shares the underlying sender, so
/// any clone may publish and any clone may open a fresh subscription.
#[derive(Clone)]
pub struct Broadcaster<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: broadcast::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> Broadcaster<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn send(&self, value: T) -> Result<usize, SendError<T>> {
        self.sender.send(value)
    }

    pub fn subscribe(&self) -> Receiver<T> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn fanout_reaches_all_subscribers() {
        let channel: Broadcaster<u64> = Broadcaster::new(10);
        let mut rx_a = channel.subscribe();
        let mut rx_b = channel.subscribe();

        channel.send(42).unwrap();

        assert_eq!(rx_a.recv().await.unwrap(), 42);
        assert_eq!(rx_b.recv().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn send_without_subscribers_is_an_error() {
        let channel: Broadcaster<u64> = Broadcaster::new(10);
        assert!(channel.send(1).is_err());
    }
}
