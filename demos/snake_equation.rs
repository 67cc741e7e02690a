use qudit_diagrams::prelude::*;
use qudit_diagrams::quantum::{approx_eq, evaluate};

fn main() -> Result<()> {
    println!("========================================================");
    println!("     SNAKE EQUATIONS FOR QUDIT CUPS                      ");
    println!("========================================================");
    println!("A cup on two qudits of dimension d is built from the");
    println!("Bell-state preparation run backwards. Bending a wire with a");
    println!("cap and then a cup gives back the straight wire.");
    println!();

    let d: usize = 3;
    let cup = Circuit::cups(d, d)?;
    let cap = Circuit::caps(d, d)?;
    println!("cup = {}", cup);
    println!("cap = {}", cap);

    let m = evaluate(&cup, &Bindings::new())?;
    println!("\nMatrix of the cup (1 × {}):", d * d);
    for z in m.row(0) {
        print!("{:.3} ", z.re);
    }
    println!();

    let id = Circuit::id(d)?;
    let snake = cap.tensor(&id)?.compose(&id.tensor(&cup)?)?;
    println!("\nSnake: {}", snake);
    println!(
        "(cap ⊗ 1) ; (1 ⊗ cup) = 1: {}",
        approx_eq(&snake, &id, &Bindings::new(), 1e-10)?
    );

    println!("\n----------- ALL DIMENSIONS ------------");
    let objects: Vec<Ty> = (2..=6).map(|d| Ty::qudits(&[d])).collect();
    let holds = laws::verify_compact_closed_laws(&QuditCircuitCategory, &objects, |a, b| {
        approx_eq(a, b, &Bindings::new(), 1e-10).unwrap_or(false)
    });
    println!("Both snake equations hold for d = 2..=6: {}", holds);

    println!("\n----------- GRADIENTS ------------");
    let theta = Symbol::new("theta");
    let amp = scalar(Expr::var("theta").cos())?;
    let circuit = cup.tensor(&amp)?;
    let grad = circuit.grad(&theta)?;
    println!("d/dθ [cup ⊗ cos θ] = {}", grad);

    let mut bindings = Bindings::new();
    bindings.insert(theta, 0.5);
    let value = evaluate(&Circuit::Sum(grad), &bindings)?;
    println!("at θ = 0.5, entry ⟨00| = {:.4}", value[[0, 0]].re);

    Ok(())
}
