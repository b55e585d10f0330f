//! Prompt construction for the slang conversion call
//!
//! The level instruction tiers and the curated glossary give the model a
//! stable register to aim for; the glossary is context, not a lookup table.

/// Curated Gen Z slang given to the model as conversion context.
pub const SLANG_GLOSSARY: &str = "\
Key Gen Z Slang to consider:
Aura: Overall vibe, energy, or personality.
Basic: Someone who likes mainstream trends and products.
Beige flag: Neither positive nor negative personality traits.
Bestie: Friend (often used ironically for strangers).
Bet: Okay, for sure, I agree.
Big yikes: Something extremely embarrassing or offensive.
Bop: An exceptionally good song.
Brainrot: Losing touch with reality from overconsumption of online content.
Bussin': Extremely good, especially for food.
Cap: Lie or exaggeration.
Caught in 4K: Undeniably caught doing something wrong.
Clapback: Swift, witty response to criticism.
Cook: To perform well or excel at something.
Crash out: Make a reckless decision due to anger or upset.
Dank: Excellent, high-quality.
Dead/ded: So funny it \"kills you.\"
Delulu: Having unrealistic or idealistic beliefs.
Drip: Trendy, high-class fashion.
Era: A period of interests or specific phase in life.
Face card: An attractive face.
Fire: Impressive, good, or cool.
Fit check: Showcasing your outfit.
Finna: Going to, about to.
Gagged: Shocked, amazed, speechless.
Ghost: End communication without explanation.
Glaze: To excessively praise or hype someone.
Glow-up: Major improvement in appearance or confidence.
GOAT: Greatest of all time.
Gucci: Good, cool, excellent.
Hit different: Being better in a distinctive way.
Ick: Sudden feeling of disgust for someone you were attracted to.
IJBOL: I just burst out laughing.
It's giving: It has the vibe or energy of something.
Iykyk: If you know, you know (inside joke).
L: Loss or failure (opposite of W).
Lit: Remarkable, interesting, or fun.
Main character: Someone who acts like they're the star of their life.
Mid: Average, mediocre, not special.
No cap: No lie, for real.
Oof: Expression of discomfort or sympathy.
Oomf: One of my followers/friends.
Out of pocket: Extremely wild, crazy or inappropriate behavior.
Periodt: Final statement with nothing more to be said.
Pick-me: Someone seeking validation by putting others down.
Pushing P: Acting with integrity while displaying success.
Ratio: When replies to a post outnumber likes/shares.
Red flag: Warning sign of toxic behavior.
Rizz: Charm or seduction skills.
Salty: Bitter, resentful, or irritated.
Sheesh: Expression of praise or being impressed.
Shook: Shocked, surprised, or bothered.
Simp: Being overly affectionate to win someone's affection.
Situationship: Ambiguous romantic relationship without defined status.
Sksksk: Expression of happiness or laughter.
Slaps: Something that's really good, especially music.
Slay: To do something exceptionally well.
Snatched: Flawlessly styled or having a narrow waist.
Stan: Supporting something to an extreme degree.
Sus: Suspicious or sketchy.
Tea: Gossip or secret information.
Touch grass: Go outside and reconnect with reality.
Understood the assignment: Did exactly what was expected, and well.
Valid: Socially acceptable or worthy of approval.
Vibe check: Assessing someone's personality or attitude.
W: Win or success (opposite of L).
Wig: Something so impressive it figuratively makes your wig fly off.
Yeet: To throw something forcefully or a general exclamation.
";

/// Instruction block for the requested intensity tier.
pub fn level_instructions(slang_level: u8) -> &'static str {
    match slang_level {
        0..=25 => {
            "Apply a LIGHT amount of Gen Z slang. The conversion should be subtle \
             with just a few slang terms. The response should be easily \
             understandable to all audiences while having a slight Gen Z flavor. \
             Use only the most common Gen Z phrases and keep most of the original \
             structure intact."
        }
        26..=50 => {
            "Apply a MODERATE amount of Gen Z slang. Create a balanced conversion \
             that includes several Gen Z terms but still maintains readability for \
             most audiences. Mix in popular Gen Z expressions where they fit \
             naturally."
        }
        51..=75 => {
            "Apply a STRONG amount of Gen Z slang. The conversion should heavily \
             use Gen Z vocabulary, speech patterns, and text conventions. Feel free \
             to modify sentence structures to match Gen Z communication styles. \
             Include abbreviations and more specialized slang terms."
        }
        _ => {
            "Apply a MAXIMUM amount of Gen Z slang. Go all out with the Gen Z \
             transformation, using extensive slang, unconventional grammar, heavy \
             abbreviations, and emoji usage where appropriate. The text should \
             sound like it was written by someone deeply immersed in Gen Z internet \
             culture. Don't hold back!"
        }
    }
}

/// Full prompt sent to the provider for one conversion.
pub fn build_prompt(text: &str, slang_level: u8) -> String {
    format!(
        "You are a \"Gen Z Slang Converter\". Your job is to rewrite text into \
         authentic, modern Gen Z slang.\n\
         Make it sound natural, not forced. The output should be fluent and \
         reflect how a Gen Z individual would actually type or speak online.\n\
         Keep the core meaning of the original text.\n\n\
         {instructions}\n\n\
         Consider using some relevant slang from the following examples if they \
         fit naturally:\n\
         {glossary}\n\
         Do not add any preambles like \"Okay, here's the Gen Z version:\". Just \
         provide the converted text.\n\n\
         Original text:\n\
         \"{text}\"\n\n\
         Gen Z Converted text (slang level: {slang_level}%):\n",
        instructions = level_instructions(slang_level),
        glossary = SLANG_GLOSSARY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert!(level_instructions(0).contains("LIGHT"));
        assert!(level_instructions(25).contains("LIGHT"));
        assert!(level_instructions(26).contains("MODERATE"));
        assert!(level_instructions(50).contains("MODERATE"));
        assert!(level_instructions(51).contains("STRONG"));
        assert!(level_instructions(75).contains("STRONG"));
        assert!(level_instructions(76).contains("MAXIMUM"));
        assert!(level_instructions(100).contains("MAXIMUM"));
    }

    #[test]
    fn prompt_embeds_input_level_and_glossary() {
        let prompt = build_prompt("I am pleased with this outcome.", 80);
        assert!(prompt.contains("I am pleased with this outcome."));
        assert!(prompt.contains("slang level: 80%"));
        assert!(prompt.contains("No cap: No lie, for real."));
        assert!(prompt.contains("MAXIMUM"));
    }
}
