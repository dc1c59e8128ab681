pub mod bot_switch;
pub mod dice;
pub mod help;

use tracing::debug;

use crate::instruction::Instruction;
use crate::store::SwitchStore;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Plain(String),
    /// Quote replies reference the triggering message; only the permission
    /// denial uses this.
    Quote(String),
}

/// Routes one instruction to a reply, or to silence. Unrecognized commands
/// produce no reply at all so unrelated prefixed chatter never triggers an
/// error message.
pub async fn dispatch(
    store: &SwitchStore,
    instruction: &Instruction,
    authorized: bool,
) -> Result<Option<Reply>> {
    // The switch command skips the enable gate, otherwise a disabled group
    // could never be turned back on.
    if instruction.command == "bot" {
        let reply = bot_switch::handle(store, instruction, authorized).await?;
        return Ok(Some(reply));
    }

    if let Some(group) = &instruction.group {
        if !store.is_enabled(group.id).await? {
            debug!("group {} has the bot switched off", group.id);
            return Ok(None);
        }
    }

    if instruction.command == "help" {
        return Ok(Some(Reply::Plain(help::USAGE.to_string())));
    }

    let reply = dice::parse_notation(&instruction.command).map(|spec| {
        let outcome = spec.roll(&mut rand::thread_rng());
        Reply::Plain(dice::format_reply(&instruction.sender.display_name, &outcome))
    });

    Ok(reply)
}
