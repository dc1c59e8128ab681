use rand::Rng;

pub const MAX_DICE: u32 = 30;
pub const MAX_FACES: u32 = 100;

const DEFAULT_DICE: u32 = 1;
const DEFAULT_FACES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSpec {
    pub count: u32,
    pub faces: u32,
}

/// Matches the full command token against `r{count}d{faces}`, where both
/// operands are optional: `r`, `r3`, `rd`, `rd20` and `r5d20` all roll.
/// Count is capped at two digits and faces at three; a longer or non-digit
/// operand means the token is not dice notation at all.
pub fn parse_notation(token: &str) -> Option<RollSpec> {
    let rest = token.strip_prefix('r')?;
    let (count, faces) = match rest.split_once('d') {
        Some((count, faces)) => (count, Some(faces)),
        None => (rest, None),
    };

    let count = parse_operand(count, 2, DEFAULT_DICE)?;
    let faces = match faces {
        Some(digits) => parse_operand(digits, 3, DEFAULT_FACES)?,
        None => DEFAULT_FACES,
    };

    Some(RollSpec {
        count: count.clamp(1, MAX_DICE),
        faces: faces.clamp(2, MAX_FACES),
    })
}

// An empty operand was omitted and takes its default. Out-of-range values
// are clamped by the caller, never rejected.
fn parse_operand(digits: &str, max_digits: usize, default: u32) -> Option<u32> {
    if digits.is_empty() {
        return Some(default);
    }
    if digits.len() > max_digits || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

#[derive(Debug)]
pub struct RollOutcome {
    pub faces: u32,
    pub rolls: Vec<u32>,
    pub total: u32,
}

impl RollSpec {
    pub fn roll(&self, rng: &mut impl Rng) -> RollOutcome {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.gen_range(1..=self.faces))
            .collect();
        let total = rolls.iter().sum();

        RollOutcome {
            faces: self.faces,
            rolls,
            total,
        }
    }
}

/// One `D{faces}={value}` line per die, plus a total line for multi-die
/// rolls.
pub fn format_reply(display_name: &str, outcome: &RollOutcome) -> String {
    let mut reply = format!("{display_name}掷骰：");
    for roll in &outcome.rolls {
        reply.push_str(&format!("\nD{}={}", outcome.faces, roll));
    }
    if outcome.rolls.len() > 1 {
        reply.push_str(&format!("\n共计{}点", outcome.total));
    }

    reply
}
