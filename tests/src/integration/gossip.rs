//! # Gossip Channel Integration
//!
//! Sender/listener pairs over real loopback TCP: broadcast fan-out,
//! self-exclusion, and per-peer independence when part of the cluster is
//! unreachable.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use shared_types::{SubmitOutcome, Transaction, TransactionSink};
    use tc_gossip::{GossipListener, GossipSender, NodeRegistry};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Records every transaction a listener forwards.
    #[derive(Default)]
    struct CollectingSink {
        seen: Mutex<Vec<Transaction>>,
    }

    impl TransactionSink for CollectingSink {
        fn submit(&self, transaction: Transaction) -> SubmitOutcome {
            self.seen.lock().unwrap().push(transaction);
            SubmitOutcome::Accepted
        }
    }

    impl CollectingSink {
        fn seen(&self) -> Vec<Transaction> {
            self.seen.lock().unwrap().clone()
        }
    }

    /// Binds a listener on an ephemeral port and runs it in the background.
    async fn spawn_listener() -> (SocketAddr, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::default());
        let listener = GossipListener::bind("127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        let addr = listener.local_addr();
        tokio::spawn(listener.run(Arc::clone(&sink)));
        (addr, sink)
    }

    /// Reserves an address nothing is listening on.
    fn dead_addr() -> SocketAddr {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        addr
    }

    async fn wait_for<F: Fn() -> bool>(condition: F) {
        for _ in 0..150 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("condition not reached within 3s");
    }

    const DEADLINE: Duration = Duration::from_secs(5);

    // =========================================================================
    // BROADCAST TESTS
    // =========================================================================

    #[tokio::test(flavor = "multi_thread")]
    async fn test_broadcast_reaches_every_peer_but_not_self() {
        let (self_addr, self_sink) = spawn_listener().await;
        let (peer_a, sink_a) = spawn_listener().await;
        let (peer_b, sink_b) = spawn_listener().await;

        let registry = Arc::new(NodeRegistry::from_addrs(vec![self_addr, peer_a, peer_b]));
        let sender = GossipSender::new(registry, 0, DEADLINE);

        let tx = Transaction::new("0ddba11", "17.txt");
        sender.broadcast(&tx);

        wait_for(|| !sink_a.seen().is_empty() && !sink_b.seen().is_empty()).await;
        assert_eq!(sink_a.seen(), vec![tx.clone()]);
        assert_eq!(sink_b.seen(), vec![tx]);

        // The sender's own listener never hears its own broadcast.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(self_sink.seen().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_dead_peer_never_blocks_the_living() {
        let (self_addr, _self_sink) = spawn_listener().await;
        let (live_addr, live_sink) = spawn_listener().await;

        let registry = Arc::new(NodeRegistry::from_addrs(vec![
            self_addr,
            dead_addr(),
            live_addr,
            dead_addr(),
        ]));
        let sender = GossipSender::new(registry, 0, DEADLINE);

        let tx = Transaction::new("5ca1ab1e", "23.txt");
        sender.broadcast(&tx);

        wait_for(|| !live_sink.seen().is_empty()).await;
        assert_eq!(live_sink.seen(), vec![tx]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_repeated_broadcasts_arrive_once_each() {
        let (self_addr, _self_sink) = spawn_listener().await;
        let (peer_addr, peer_sink) = spawn_listener().await;

        let registry = Arc::new(NodeRegistry::from_addrs(vec![self_addr, peer_addr]));
        let sender = GossipSender::new(registry, 0, DEADLINE);

        for i in 0..4 {
            sender.broadcast(&Transaction::new(format!("{i:08x}"), format!("{i}.txt")));
        }

        wait_for(|| peer_sink.seen().len() == 4).await;

        // At-most-once: no duplicates beyond the four sends.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(peer_sink.seen().len(), 4);
    }
}
