//! Exhaustive checks of scoring and generation over the whole code space
//!
//! There are only 9*8*7*6 = 3024 valid codes, so properties are checked
//! against every code rather than a random sample.

use my_mastermind::core::{score, Code, CodeGenerator, Symbol, ALPHABET_SIZE, CODE_LENGTH};

fn all_codes() -> Vec<Code> {
    let mut codes = Vec::new();
    for a in Symbol::all() {
        for b in Symbol::all() {
            for c in Symbol::all() {
                for d in Symbol::all() {
                    if let Ok(code) = Code::from_symbols([a, b, c, d]) {
                        codes.push(code);
                    }
                }
            }
        }
    }
    codes
}

#[test]
fn test_code_space_size() {
    assert_eq!(all_codes().len(), 3024);
}

#[test]
fn test_self_score_is_win() {
    for code in all_codes() {
        let s = score(&code, &code);
        assert_eq!((s.well_placed, s.misplaced), (4, 0), "code {code}");
        assert!(s.is_win());
    }
}

#[test]
fn test_score_bounds_and_symmetry() {
    let codes = all_codes();
    // Every secret against a spread of guesses keeps the test fast in debug builds
    for secret in &codes {
        for guess in codes.iter().step_by(37) {
            let forward = score(secret, guess);
            let backward = score(guess, secret);

            let total = (forward.well_placed + forward.misplaced) as usize;
            assert!(total <= CODE_LENGTH, "{secret} vs {guess}");

            let all_present = guess.symbols().iter().all(|s| secret.contains(*s));
            assert_eq!(total == CODE_LENGTH, all_present, "{secret} vs {guess}");

            assert_eq!(forward, backward, "{secret} vs {guess}");
            assert_eq!(forward.is_win(), secret == guess);
        }
    }
}

#[test]
fn test_misplaced_matches_shared_symbols() {
    // With distinct symbols, misplaced is simply shared symbols minus exact hits
    let codes = all_codes();
    let secret = Code::parse("2580").unwrap();
    for guess in &codes {
        let shared = guess
            .symbols()
            .iter()
            .filter(|s| secret.contains(**s))
            .count();
        let s = score(&secret, guess);
        assert_eq!(
            s.misplaced as usize,
            shared - s.well_placed as usize,
            "guess {guess}"
        );
    }
}

#[test]
fn test_generated_codes_cover_alphabet_uniformly() {
    let mut generator = CodeGenerator::with_seed(0xC0DE);
    let mut first_slot = [0u32; ALPHABET_SIZE];
    let draws = 9000;

    for _ in 0..draws {
        let code = generator.generate();
        assert!(Code::parse(&code.to_string()).is_ok());
        first_slot[code.symbols()[0].index()] += 1;
    }

    // Each symbol should lead about 1000 times; allow a generous margin
    for (symbol, count) in first_slot.iter().enumerate() {
        assert!(
            (700..1300).contains(count),
            "symbol {symbol} led {count} times"
        );
    }
}
