use orderfsm::domain::tenant::Tenant;
use orderfsm::domain::tenanted::TenantedOrder;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_log(path: &Path, rows: &[(u32, &str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order", "tenant", "action"])?;
    for (order, tenant, action) in rows {
        wtr.write_record([order.to_string().as_str(), *tenant, *action])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a log of `orders` independent orders, each walked through up to
/// `steps` legal commands picked at random. Returns the expected final
/// instance of every order.
pub fn generate_log(
    path: &Path,
    orders: u32,
    steps: usize,
    seed: u64,
) -> Result<Vec<TenantedOrder>, Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["order", "tenant", "action"])?;

    let mut finals = Vec::new();
    for id in 1..=orders {
        let mut order = TenantedOrder::new(Tenant::Customer);
        for _ in 0..steps {
            let Some((tenant, action)) = Tenant::ALL
                .into_iter()
                .flat_map(|tenant| {
                    order
                        .set_tenant(tenant)
                        .possible_actions()
                        .into_iter()
                        .map(move |action| (tenant, action))
                })
                .choose(&mut rng)
            else {
                break;
            };
            order = order
                .set_tenant(tenant)
                .act(action)
                .map_err(Error::other)?;
            wtr.write_record([id.to_string().as_str(), tenant.as_str(), action.as_str()])?;
        }
        finals.push(order);
    }

    wtr.flush()?;
    Ok(finals)
}
