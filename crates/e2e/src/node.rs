use {
    std::{fmt, process::Stdio, time::Duration},
    tokio::{
        io::{AsyncBufReadExt as _, BufReader},
        process::{Child, Command},
        sync::oneshot,
    },
    url::Url,
};

/// How long to wait for the node to report its endpoint.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// A blockchain node for development purposes. Dropping this type will
/// terminate the node.
pub struct Node {
    process: Child,
    url: Url,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("url", &self.url).finish()
    }
}

impl Node {
    /// Spawns a fresh `anvil` on a free port.
    pub async fn new() -> Self {
        // Allow using some custom logic to spawn `anvil` by setting `ANVIL_COMMAND`,
        // for example a script that runs it inside a container.
        let command = std::env::var("ANVIL_COMMAND").unwrap_or("anvil".to_string());

        let mut process = Command::new(&command)
            .arg("--port")
            .arg("0") // use 0 to let `anvil` use any open port
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap_or_else(|err| panic!("failed to spawn {command:?}: {err}"));

        let stdout = process.stdout.take().unwrap();
        let (sender, receiver) = oneshot::channel::<String>();

        tokio::task::spawn(async move {
            let mut sender = Some(sender);
            const NEEDLE: &str = "Listening on ";
            let mut reader = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = reader.next_line().await {
                tracing::trace!(line);
                if let Some(addr) = line.strip_prefix(NEEDLE) {
                    match sender.take() {
                        Some(sender) => {
                            let _ = sender.send(format!("http://{addr}"));
                        }
                        None => tracing::error!(addr, "detected multiple anvil endpoints"),
                    }
                }
            }
        });

        let url = tokio::time::timeout(STARTUP_TIMEOUT, receiver)
            .await
            .expect("finding anvil URL timed out")
            .expect("anvil exited before listening");
        let url = Url::parse(&url).unwrap();
        tracing::debug!(%url, "started node");
        Self { process, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // This only sends SIGKILL to the process but does not wait for the process to
        // actually terminate. But since `anvil` is fairly well behaved that
        // should be good enough.
        if let Err(err) = self.process.start_kill() {
            tracing::error!("failed to kill anvil: {err:?}");
        }
    }
}
