use std::sync::mpsc;

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    infra::{attachments::FileImageSource, scheduler::ThreadReplyScheduler},
    ui::{self, ChannelEventSource, CompositeEventSource, CrosstermEventSource},
    usecases::{bootstrap, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command() {
        Command::Run => {
            // The guard keeps the background log writer alive for the whole run.
            let (context, _log_guard) = bootstrap::bootstrap(cli.config_path())?;

            let (sender, receiver) = mpsc::channel();
            let scheduler = ThreadReplyScheduler::new(sender);
            let mut orchestrator =
                DefaultShellOrchestrator::new(scheduler, FileImageSource, &context.config.chat);
            let mut event_source = CompositeEventSource::new(
                ChannelEventSource::new(receiver),
                CrosstermEventSource,
            );

            ui::shell::start(&context, &mut event_source, &mut orchestrator)
        }
    }
}
