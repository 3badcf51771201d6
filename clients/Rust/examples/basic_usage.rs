use qubo_gateway_sdk::{QuboGatewayClient, SolveOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a client (adjust URL as needed)
    let client = QuboGatewayClient::new("http://127.0.0.1:9000")?;

    // QUBO over two variables:
    //   E(x) = -1.5 x0 - 2.0 x1 + 1.0 x0 x1
    // Optimum is x = [1, 1] with E = -2.5
    println!("📊 Solving QUBO...\n");
    let qubo = client
        .solve_qubo(
            vec![(0, 0, -1.5), (1, 1, -2.0), (0, 1, 1.0)],
            SolveOptions::seeded(1000, 42),
        )
        .await?;
    println!("  Best energy: {}", qubo.best_energy);
    println!("  State: {:?}", qubo.state);
    println!("  Iterations: {} in {:.2} ms\n", qubo.iterations, qubo.time_ms);

    // Max-Cut on a 4-cycle: the best cut separates alternating vertices
    println!("📊 Solving Max-Cut...\n");
    let max_cut = client
        .solve_max_cut(
            4,
            vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
            SolveOptions::default(),
        )
        .await?;
    println!("  Cut value: {:?}", max_cut.cut_value);
    println!("  Partition: {:?}", max_cut.state);

    // Rejections come back as API errors with the gateway's message
    match client.solve_max_cut(0, vec![], SolveOptions::default()).await {
        Err(e) if e.is_rejected() => println!("\n✓ Rejected as expected: {}", e),
        other => println!("\n⚠ Unexpected outcome: {:?}", other),
    }

    Ok(())
}
