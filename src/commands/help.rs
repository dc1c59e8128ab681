/// Sent verbatim for `help`; other tooling checks this text, so the wording
/// and spacing must not change.
pub const USAGE: &str = "\
Usage:
.bot on       开启bot
.bot off      关闭bot
.bot status   查看bot状态
.help         显示帮助信息
.r            相当于.r1d100
.rd           相当于.r1d100
.r{x}d{y}     投x枚y面骰子，其中x<=30且y<=100";
