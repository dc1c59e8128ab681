use poise::serenity_prelude as serenity;

use crate::config::Config;

/// Whether this sender may toggle the group switch: a configured operator,
/// or a member holding Administrator or Manage Guild in the group.
pub async fn is_authorized(
    ctx: &serenity::Context,
    message: &serenity::Message,
    config: &Config,
) -> bool {
    if config.operators.contains(&message.author.id.get()) {
        return true;
    }

    let Some(guild_id) = message.guild_id else {
        return false;
    };
    let Ok(member) = guild_id.member(ctx, message.author.id).await else {
        return false;
    };
    let Some(guild) = message.guild(&ctx.cache) else {
        return false;
    };

    let permissions = guild.member_permissions(&member);
    permissions.administrator() || permissions.manage_guild()
}
