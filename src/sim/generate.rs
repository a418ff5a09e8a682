use crate::Payoff;
use crate::game::game::Game;
use crate::game::tensor::Tensor;
use rand::Rng;
use rand::rngs::SmallRng;

/// a game with uniform [0,1) payoffs for the given strategy shape. any
/// real-valued distribution would do; correctness downstream never leans on
/// the payoff law, only on genericity.
pub fn random_game(strategies: &[usize], rng: &mut SmallRng) -> Game {
    let payoffs = (0..strategies.len())
        .map(|player| {
            let shape = std::iter::once(strategies[player])
                .chain(
                    strategies
                        .iter()
                        .enumerate()
                        .filter(|&(q, _)| q != player)
                        .map(|(_, &n)| n),
                )
                .collect::<Vec<_>>();
            grow(&shape, rng)
        })
        .collect();
    Game::new(payoffs).expect("random tensors are well formed")
}

fn grow(shape: &[usize], rng: &mut SmallRng) -> Tensor {
    match shape.split_first() {
        None => Tensor::from(rng.random::<Payoff>()),
        Some((&n, rest)) => Tensor::Axis((0..n).map(|_| grow(rest, rng)).collect()),
    }
}
