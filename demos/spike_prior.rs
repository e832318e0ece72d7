// Weigh a flat prior against a 10x spike on [0.45, 0.55] after seeing 15
// heads in 30 coin flips. The posterior mass sits at p = 0.5, so the spike
// prior should win by a wide margin.
use bayes_factor::{BayesFactor, Interval, Observation, Uniform};

fn main() {
    let obs = Observation::new(30, 15).expect("k <= n");
    let spike = Interval::new(0.45, 0.55, 10.0).expect("valid interval");

    let bf = BayesFactor::new(obs, Uniform, spike);

    match bf.compute() {
        Ok(k) => println!("{}", k),
        Err(err) => eprintln!("Bayes factor undefined: {}", err),
    }
}
