#[cfg(test)]
#[path = "../../tests/unit/reader/route_reader_test.rs"]
mod route_reader_test;

use super::*;
use vrp_core::models::solution::{Route, RouteBuilder, Schedule};

/// Specifies which leg of a shipment is performed by an activity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ShipmentLeg {
    Pickup,
    Delivery,
}

impl ShipmentLeg {
    fn parse(tag: &str) -> ReadResult<Self> {
        match tag {
            "pickupShipment" => Ok(ShipmentLeg::Pickup),
            "deliverShipment" => Ok(ShipmentLeg::Delivery),
            _ => Err(ReadError::UnsupportedVariant { tag: tag.to_string() }),
        }
    }
}

/// Reads initial routes. Jobs referenced there are frozen: they are not published as free jobs.
pub(super) fn read_initial_routes<N: DocumentNode>(
    root: &N,
    context: &mut ReadContext,
    problem: &mut ProblemBuilder,
) -> ReadResult<()> {
    for route_node in root.nodes_at("initialRoutes.route") {
        let route = read_route(&route_node, "initialRoutes.route", context, false)?;

        route.activities.iter().for_each(|activity| context.freeze(activity.job_id()));
        problem.add_initial_vehicle_route(route);
    }

    debug!(frozen = context.frozen_ids().count(), "read initial routes");

    Ok(())
}

/// Reads previously computed solutions. Referenced jobs are kept unfrozen.
pub(super) fn read_solutions<N: DocumentNode>(root: &N, context: &ReadContext) -> ReadResult<Vec<Solution>> {
    let solutions = root
        .nodes_at("solutions.solution")
        .iter()
        .map(|solution_node| {
            let cost = solution_node.get_f64("cost")?;
            let routes = solution_node
                .nodes_at("routes.route")
                .iter()
                .map(|route_node| read_route(route_node, "solutions.solution.routes.route", context, true))
                .collect::<ReadResult<Vec<_>>>()?;

            Ok(Solution::new(routes, cost))
        })
        .collect::<ReadResult<Vec<_>>>()?;

    debug!(solutions = solutions.len(), "read solutions");

    Ok(solutions)
}

fn read_route<N: DocumentNode>(node: &N, section: &str, context: &ReadContext, has_end: bool) -> ReadResult<Route> {
    let vehicle_id = require_string(node, section, "vehicleId")?;
    let vehicle = context.vehicles.resolve(&vehicle_id)?;
    let departure = require_f64(node, section, "start")?;

    let builder = RouteBuilder::new(vehicle).departure_time(departure);
    let builder = if has_end { builder.end_time(require_f64(node, section, "end")?) } else { builder };

    let act_section = join(section, "act");

    node.nodes_at("act")
        .iter()
        .try_fold(builder, |builder, act_node| read_activity(act_node, &act_section, context, builder))?
        .build()
        .map_err(ReadError::from)
}

fn read_activity<N: DocumentNode>(
    node: &N,
    section: &str,
    context: &ReadContext,
    builder: RouteBuilder,
) -> ReadResult<RouteBuilder> {
    let tag = require_string(node, section, "[@type]")?;
    let arrival = node.get_f64("arrTime")?.unwrap_or(0.);
    let departure = node.get_f64("endTime")?.unwrap_or(0.);
    let schedule = Schedule::new(arrival, departure);

    let shipment_id = match (node.get_string("serviceId"), node.get_string("shipmentId")) {
        (Some(service_id), Some(shipment_id)) => {
            return Err(ReadError::AmbiguousSpecification {
                entity: "activity",
                id: format!("{service_id}/{shipment_id}"),
                reason: "either use 'serviceId' or 'shipmentId', not both".to_string(),
            });
        }
        (Some(service_id), None) => {
            let service = context.services.resolve(&service_id)?;
            return Ok(builder.add_service(service, schedule));
        }
        (None, Some(shipment_id)) => shipment_id,
        (None, None) => return Err(ReadError::missing(&join(section, "shipmentId"))),
    };
    let shipment = context.shipments.resolve(&shipment_id)?;

    Ok(match ShipmentLeg::parse(&tag)? {
        ShipmentLeg::Pickup => builder.add_pickup(shipment, schedule)?,
        ShipmentLeg::Delivery => builder.add_delivery(shipment, schedule)?,
    })
}
