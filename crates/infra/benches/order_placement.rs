use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use std::sync::Arc;

use chrono::Utc;
use storefront_catalog::CatalogProduct;
use storefront_core::{CustomerId, ProductId};
use storefront_customers::Customer;
use storefront_infra::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore};
use storefront_orders::{CreateOrder, OrderLineRequest, OrderPlacement, assemble_lines};

fn bench_line_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_assembly");
    for lines in [1usize, 8, 64] {
        let snapshot: Vec<CatalogProduct> = (0..lines)
            .map(|_| CatalogProduct::new(ProductId::new(), "Bench Product", 1000, 1_000_000).unwrap())
            .collect();
        let request: Vec<OrderLineRequest> = snapshot
            .iter()
            .map(|p| OrderLineRequest::new(p.id(), 1).unwrap())
            .collect();

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| assemble_lines(black_box(&request), black_box(&snapshot)).unwrap())
        });
    }
    group.finish();
}

fn bench_order_placement(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("tokio runtime");

    let mut group = c.benchmark_group("order_placement");
    for lines in [1usize, 8] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            // Fresh stores per iteration so stock and order volume stay bounded.
            b.iter_batched(
                || {
                    let customers = Arc::new(InMemoryCustomerStore::new());
                    let products = Arc::new(InMemoryProductStore::new());
                    let orders = Arc::new(InMemoryOrderStore::new());
                    let customer = Customer::new(CustomerId::new(), "Bench Customer").unwrap();
                    customers.insert(customer.clone()).unwrap();

                    let mut request = Vec::with_capacity(lines);
                    for _ in 0..lines {
                        let product =
                            CatalogProduct::new(ProductId::new(), "Bench Product", 1000, 1_000_000)
                                .unwrap();
                        request.push(OrderLineRequest::new(product.id(), 1).unwrap());
                        products.insert(product).unwrap();
                    }

                    let command = CreateOrder {
                        customer_id: customer.id(),
                        lines: request,
                        occurred_at: Utc::now(),
                    };
                    (OrderPlacement::new(customers, products, orders), command)
                },
                |(service, command)| rt.block_on(async { service.place(command).await.unwrap() }),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line_assembly, bench_order_placement);
criterion_main!(benches);
