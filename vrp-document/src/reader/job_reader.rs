#[cfg(test)]
#[path = "../../tests/unit/reader/job_reader_test.rs"]
mod job_reader_test;

use super::*;
use std::sync::Arc;
use vrp_core::models::common::{Duration, TimeWindow};
use vrp_core::models::ModelResult;
use vrp_core::models::problem::{Service, ServiceBuilder, Shipment, ShipmentBuilder};

/// Reads shipments into the registry, they are added to the problem later unless frozen.
pub(super) fn read_shipments<N: DocumentNode>(root: &N, context: &mut ReadContext) -> ReadResult<()> {
    for shipment_node in root.nodes_at("shipments.shipment") {
        let shipment = read_shipment(&shipment_node)?;
        context.shipments.insert(&shipment.id.clone(), Arc::new(shipment))?;
    }

    debug!(shipments = context.shipments.len(), "read shipments");

    Ok(())
}

/// Reads services into the registry, they are added to the problem later unless frozen.
pub(super) fn read_services<N: DocumentNode>(
    root: &N,
    context: &mut ReadContext,
    factory: &dyn ServiceBuilderFactory,
) -> ReadResult<()> {
    for service_node in root.nodes_at("services.service") {
        let service = read_service(&service_node, factory)?;
        context.services.insert(&service.id.clone(), Arc::new(service))?;
    }

    debug!(services = context.services.len(), "read services");

    Ok(())
}

fn read_shipment<N: DocumentNode>(node: &N) -> ReadResult<Shipment> {
    const SECTION: &str = "shipments.shipment";

    let id = require_string(node, SECTION, "[@id]")?;
    let builder = ShipmentBuilder::new(&id);

    let builder = match read_capacity(node, SECTION, "capacity-demand", "shipment", &id)? {
        CapacitySpec::Scalar(value) => builder.size(value),
        CapacitySpec::Dimensions(dimensions) => dimensions
            .into_iter()
            .try_fold(builder, |builder, (index, value)| builder.add_size_dimension(index, value))?,
    };

    let pickup = read_shipment_place(node, "pickup")?;
    let delivery = read_shipment_place(node, "delivery")?;

    let builder = pickup.apply(
        builder,
        |builder, id| builder.pickup_location_id(id),
        |builder, coord| builder.pickup_coord(coord),
        |builder, duration| builder.pickup_duration(duration),
        |builder, time_window| builder.pickup_time_window(time_window),
    )?;
    let builder = delivery.apply(
        builder,
        |builder, id| builder.delivery_location_id(id),
        |builder, coord| builder.delivery_coord(coord),
        |builder, duration| builder.delivery_duration(duration),
        |builder, time_window| builder.delivery_time_window(time_window),
    )?;

    Ok(builder.build()?)
}

fn read_service<N: DocumentNode>(node: &N, factory: &dyn ServiceBuilderFactory) -> ReadResult<Service> {
    const SECTION: &str = "services.service";

    let id = require_string(node, SECTION, "[@id]")?;
    let tag = node.get_string("[@type]").unwrap_or_else(|| "service".to_string());

    let builder = match read_capacity(node, SECTION, "capacity-demand", "service", &id)? {
        CapacitySpec::Scalar(value) => factory.create_builder(&tag, &id, Some(value)),
        CapacitySpec::Dimensions(dimensions) => dimensions
            .into_iter()
            .try_fold(factory.create_builder(&tag, &id, None), |builder, (index, value)| {
                builder.add_size_dimension(index, value)
            })?,
    };

    let place = PlaceData {
        location_id: node.get_string("locationId"),
        coord: read_coord(node, "")?,
        duration: node.get_f64("duration")?,
        time_window: read_service_time_window(node)?,
    };

    let builder = place.apply(
        builder,
        ServiceBuilder::location_id,
        ServiceBuilder::coord,
        ServiceBuilder::duration,
        ServiceBuilder::time_window,
    )?;

    Ok(builder.build()?)
}

/// Returns the last of listed time windows, each of them must have both start and end.
fn read_service_time_window<N: DocumentNode>(node: &N) -> ReadResult<Option<TimeWindow>> {
    const SECTION: &str = "services.service.timeWindows.timeWindow";

    node.nodes_at("timeWindows.timeWindow").iter().try_fold(None, |_, tw_node| -> ReadResult<_> {
        let start = require_f64(tw_node, SECTION, "start")?;
        let end = require_f64(tw_node, SECTION, "end")?;

        Ok(Some(TimeWindow::new(start, end)?))
    })
}

/// Place properties as they are specified in the document.
struct PlaceData {
    location_id: Option<String>,
    coord: Option<Coordinate>,
    duration: Option<Duration>,
    time_window: Option<TimeWindow>,
}

impl PlaceData {
    /// Passes specified properties to the builder, absent ones keep builder defaults.
    fn apply<B>(
        self,
        builder: B,
        location_id: impl FnOnce(B, &str) -> B,
        coord: impl FnOnce(B, Coordinate) -> B,
        duration: impl FnOnce(B, Duration) -> ModelResult<B>,
        time_window: impl FnOnce(B, TimeWindow) -> B,
    ) -> ReadResult<B> {
        let builder = match self.location_id {
            Some(id) => location_id(builder, &id),
            None => builder,
        };
        let builder = match self.coord {
            Some(value) => coord(builder, value),
            None => builder,
        };
        let builder = match self.duration {
            Some(value) => duration(builder, value)?,
            None => builder,
        };
        let builder = match self.time_window {
            Some(value) => time_window(builder, value),
            None => builder,
        };

        Ok(builder)
    }
}

/// Reads a shipment place, only the first time window is considered and only when it has both start and end.
fn read_shipment_place<N: DocumentNode>(node: &N, role: &str) -> ReadResult<PlaceData> {
    let start = node.get_f64(&format!("{role}.timeWindows.timeWindow(0).start"))?;
    let end = node.get_f64(&format!("{role}.timeWindows.timeWindow(0).end"))?;

    let time_window = match (start, end) {
        (Some(start), Some(end)) => Some(TimeWindow::new(start, end)?),
        _ => None,
    };

    Ok(PlaceData {
        location_id: node.get_string(&format!("{role}.locationId")),
        coord: read_coord(node, &format!("{role}."))?,
        duration: node.get_f64(&format!("{role}.duration"))?,
        time_window,
    })
}
