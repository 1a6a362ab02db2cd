use serde_json::{json, Value};

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Ben", "Chloe", "Diego", "Emma", "Farah", "Grace", "Hiro", "Isaac", "Jia", "Kofi", "Lena",
];
const LAST_NAMES: [&str; 10] = [
    "Lopez", "Nguyen", "Okafor", "Patel", "Kim", "Schmidt", "Rossi", "Cohen", "Silva", "Tanaka",
];
const UNIVERSITIES: [&str; 6] = [
    "Stanford University",
    "MIT",
    "UC Berkeley",
    "Carnegie Mellon University",
    "University of Michigan",
    "Georgia Tech",
];
const MAJORS: [&str; 6] = [
    "Computer Science",
    "Mathematics",
    "Electrical Engineering",
    "Data Science",
    "Biology, B.S.",
    "Design",
];
const SKILLS: [&str; 14] = [
    "Python", "JavaScript", "TypeScript", "Rust", "Go", "Java", "C++", "SQL", "Figma", "React",
    "Swift", "Kotlin", "Docker", "Excel",
];
const CULTURE_TAGS: [&str; 8] = [
    "Collaborative",
    "Innovative",
    "Fast-Paced",
    "Remote-Friendly",
    "Mentorship",
    "Detail-Oriented",
    "Mission-Driven",
    "Work-Life Balance",
];
const TRANSCRIPT_LINES: [&str; 6] = [
    "I am fluent in Spanish and love coding",
    "I speak English and Mandarin at home",
    "My Korean is native level, I grew up in Seoul",
    "I'm bilingual in French and English",
    "I enjoy building side projects on weekends",
    "I speak Hindi fluently with my family",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// `k` distinct items, in list order.
    fn sample(&mut self, items: &[&str], k: usize) -> Vec<String> {
        let mut chosen = vec![false; items.len()];
        for _ in 0..k.min(items.len()) {
            let mut i = self.below(items.len());
            while chosen[i] {
                i = (i + 1) % items.len();
            }
            chosen[i] = true;
        }
        items
            .iter()
            .zip(chosen)
            .filter(|(_, c)| *c)
            .map(|(s, _)| s.to_string())
            .collect()
    }
}

fn candidate(rng: &mut SimpleRng, n: usize) -> Value {
    let first = rng.pick(&FIRST_NAMES);
    let last = rng.pick(&LAST_NAMES);
    let videos = rng.below(4);
    let video = |slot: usize| {
        if slot <= videos {
            Value::String(format!("https://media.example.com/{n}/video{slot}.mp4"))
        } else {
            Value::String(String::new())
        }
    };
    // Mix numeric and text years the way the onboarding form stores them.
    let year = 2024 + rng.below(4) as i64;
    let graduation_year = if n % 3 == 0 {
        json!(year.to_string())
    } else {
        json!(year)
    };
    let skill_count = 2 + rng.below(4);
    let tag_count = 1 + rng.below(3);
    let transcripts: Vec<&str> = if videos > 0 {
        vec![rng.pick(&TRANSCRIPT_LINES)]
    } else {
        Vec::new()
    };

    let github = if n % 2 == 0 {
        json!(format!("https://github.com/{}{n}", first.to_lowercase()))
    } else {
        Value::Null
    };

    json!({
        "id": format!("cand_{n:04}"),
        "firstName": first,
        "lastName": last,
        "email": format!("{}.{}{n}@example.edu", first.to_lowercase(), last.to_lowercase()),
        "university": rng.pick(&UNIVERSITIES),
        "major": rng.pick(&MAJORS),
        "graduationYear": graduation_year,
        "skills": rng.sample(&SKILLS, skill_count),
        "culture": { "cultureTags": rng.sample(&CULTURE_TAGS, tag_count) },
        "linkedInURL": format!("https://linkedin.com/in/{}-{}-{n}", first.to_lowercase(), last.to_lowercase()),
        "gitHubURL": github,
        "resume": Value::Null,
        "video1": video(1),
        "video2": video(2),
        "video3": video(3),
        "transcripts": transcripts,
    })
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(120);

    let candidates: Vec<Value> = (0..count).map(|n| candidate(&mut rng, n)).collect();

    let output_path = "candidates.json";
    let text = serde_json::to_string_pretty(&candidates).expect("Failed to serialise candidates");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!("Wrote {count} candidates to {output_path}");
}
