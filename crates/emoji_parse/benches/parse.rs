use criterion::{criterion_group, criterion_main, Criterion};

static INPUT: &str = r#"
Both 👬 dense 😍 and sparse tables can 🦎 be 😉 serialized to raw ☠️😅 bytes, and then 🤔 cheaply deserialized.
Deserialization always 💁‍♀️ takes 💅 constant time 😋 since 👨 searching ⚓ can 🤦‍♂️ be 💰 performed 🎭💃 directly on 🔛 the raw 😷😩💩💩 bytes.
Skin tones 👏🏽👍🏿 and families 👨‍👩‍👦‍👦 and flags 🏳️‍🌈 🇨🇿 🇯🇵 all take the long path, while 😂 plain text between them does not.
The astronaut 👨🏿‍🚀 rides 🚀 past 🪐 the detective 🕵🏿 and nobody 🙅🏻‍♂️🙅🏻‍♂️ notices. ✨
žščřďťňŽŠČŘĎŤŇóúýů and other low-range text is all boundary territory, so runs stay short. 🤷‍♀️
"#;

fn criterion_benchmark(c: &mut Criterion) {
    let parsed = emoji_parse::get_codepoints(INPUT);
    assert!(!parsed.codepoints.is_empty());

    let mut g = c.benchmark_group("get_codepoints");
    g.bench_with_input("mixed_text", INPUT, |b, x| b.iter(|| emoji_parse::get_codepoints(x)));
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
