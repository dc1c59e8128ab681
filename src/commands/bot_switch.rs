use crate::commands::Reply;
use crate::instruction::Instruction;
use crate::store::{SwitchState, SwitchStore};
use crate::Result;

const NEEDS_GROUP: &str = "请在群里执行该命令";
const BAD_ARGUMENTS: &str = "参数格式错误";
const PERMISSION_DENIED: &str = "权限不足，无法操作bot开关";
const SWITCHED_ON: &str = "骰娘已启动";
const SWITCHED_OFF: &str = "骰娘已关闭";
const STATUS_ON: &str = "骰娘当前已开启";
const STATUS_OFF: &str = "骰娘当前已关闭";
const INVALID_ARGUMENT: &str = "开关参数无效";

/// `bot on|off|status` for the group the message came from. The caller has
/// already decided whether the sender is authorized; unauthorized senders
/// get a quote reply and no state change.
pub async fn handle(
    store: &SwitchStore,
    instruction: &Instruction,
    authorized: bool,
) -> Result<Reply> {
    let Some(group) = &instruction.group else {
        return Ok(Reply::Plain(NEEDS_GROUP.to_string()));
    };
    if instruction.args.len() != 1 {
        return Ok(Reply::Plain(BAD_ARGUMENTS.to_string()));
    }
    if !authorized {
        return Ok(Reply::Quote(PERMISSION_DENIED.to_string()));
    }

    let reply = match instruction.args[0].as_str() {
        "on" => {
            store.set(group.id, &group.name, SwitchState::On).await?;
            SWITCHED_ON
        }
        "off" => {
            store.set(group.id, &group.name, SwitchState::Off).await?;
            SWITCHED_OFF
        }
        "status" => {
            if store.is_enabled(group.id).await? {
                STATUS_ON
            } else {
                STATUS_OFF
            }
        }
        _ => INVALID_ARGUMENT,
    };

    Ok(Reply::Plain(reply.to_string()))
}
