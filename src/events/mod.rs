use poise::serenity_prelude as serenity;
use tracing::info;

use crate::commands::{self, Reply};
use crate::common::is_authorized;
use crate::instruction::{GroupContext, Instruction, Sender};
use crate::{Data, Error, Result};

pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    user_data: &Data,
) -> Result {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("{} is connected!", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            handle_message(ctx, new_message, user_data).await?;
        }
        _ => {}
    }

    Ok(())
}

async fn handle_message(
    ctx: &serenity::Context,
    message: &serenity::Message,
    user_data: &Data,
) -> Result {
    if message.author.bot {
        return Ok(());
    }
    let Some(text) = message.content.strip_prefix(&user_data.config.command_prefix) else {
        return Ok(());
    };

    let sender = Sender {
        display_name: message
            .member
            .as_deref()
            .and_then(|member| member.nick.clone())
            .unwrap_or_else(|| message.author.display_name().to_string()),
    };
    let group = message.guild_id.map(|id| GroupContext {
        id: id.get() as i64,
        name: id.name(&ctx.cache).unwrap_or_default(),
    });
    let instruction = Instruction::parse(text, sender, group);

    // Only the switch command needs the capability check; skip the member
    // lookup for everything else.
    let authorized =
        instruction.command == "bot" && is_authorized(ctx, message, &user_data.config).await;

    match commands::dispatch(&user_data.switches, &instruction, authorized).await? {
        Some(Reply::Plain(reply)) => {
            message.channel_id.say(ctx, reply).await?;
        }
        Some(Reply::Quote(reply)) => {
            message.reply(ctx, reply).await?;
        }
        None => {}
    }

    Ok(())
}
