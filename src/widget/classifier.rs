use std::ops::RangeInclusive;

use rand::Rng;

pub const TICKET_RANGE: RangeInclusive<u32> = 10_000..=99_999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    TicketConfirmed,
    Normal,
}

/// Decides whether a relay reply confirms a support ticket.
pub trait ReplyClassifier: Send + Sync {
    fn classify(&self, reply: &str) -> Classification;
}

/// Matches replies mentioning both "ticket" and "created", in any case.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordTicketClassifier;

impl ReplyClassifier for KeywordTicketClassifier {
    fn classify(&self, reply: &str) -> Classification {
        let lower = reply.to_lowercase();
        if lower.contains("ticket") && lower.contains("created") {
            Classification::TicketConfirmed
        } else {
            Classification::Normal
        }
    }
}

pub trait TicketNumbers: Send {
    fn next_ticket(&mut self) -> u32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTicketNumbers;

impl TicketNumbers for RandomTicketNumbers {
    fn next_ticket(&mut self) -> u32 {
        rand::rng().random_range(TICKET_RANGE)
    }
}

/// Appends a ticket number to confirmations; other replies pass through untouched.
pub fn decorate_reply(
    reply: String,
    classifier: &dyn ReplyClassifier,
    tickets: &mut dyn TicketNumbers,
) -> String {
    match classifier.classify(&reply) {
        Classification::TicketConfirmed => format!(
            "{reply} Your ticket number is #{}. The support team will contact you shortly.",
            tickets.next_ticket()
        ),
        Classification::Normal => reply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl TicketNumbers for Fixed {
        fn next_ticket(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn keyword_match_ignores_case() {
        let c = KeywordTicketClassifier;
        assert_eq!(c.classify("Your TICKET has been Created"), Classification::TicketConfirmed);
        assert_eq!(c.classify("Your ticket has been created."), Classification::TicketConfirmed);
        assert_eq!(c.classify("I can create a support ticket for you."), Classification::Normal);
        assert_eq!(c.classify("The report was created."), Classification::Normal);
    }

    #[test]
    fn confirmation_gets_number_and_normal_reply_is_unchanged() {
        let c = KeywordTicketClassifier;
        let decorated = decorate_reply("Your ticket has been created.".into(), &c, &mut Fixed(42_017));
        assert_eq!(
            decorated,
            "Your ticket has been created. Your ticket number is #42017. The support team will contact you shortly."
        );

        let plain = "Library opens at 9 AM.".to_string();
        assert_eq!(decorate_reply(plain.clone(), &c, &mut Fixed(42_017)), plain);
    }

    #[test]
    fn random_numbers_have_five_digits() {
        let mut numbers = RandomTicketNumbers;
        for _ in 0..1_000 {
            let n = numbers.next_ticket();
            assert!(TICKET_RANGE.contains(&n), "{n} out of range");
        }
    }
}
